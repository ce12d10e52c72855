//! Terminal front end: the interactive lookup loop and the text rendering of
//! its results.

pub mod app;
pub mod render;

pub use app::{ConsoleApp, EXIT_COMMAND};
pub use render::render_orders;
