mod app;
mod logo;
mod ui;
mod utils;
