pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test;
