pub mod app;
pub mod controller;
pub mod screen;
pub mod ui;
pub mod utils;

pub use app::App;
pub use controller::{QuoteController, QuoteEvent, QuoteView};
pub use screen::{Alert, QuoteScreen};
