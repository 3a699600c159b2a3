pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;

pub use console::Console;
pub use error::MenuError;
pub use menu::{Action, Entry, Menu};
