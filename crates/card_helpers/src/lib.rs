mod app;
pub use app::*;

pub mod input;
pub mod reset;

mod window_resizing;
