use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid choice {choice}, expected 0 to {max}")]
    InvalidSelection { choice: i64, max: usize },
    #[error("Not a number: '{0}'")]
    MalformedInput(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Input closed")]
    InputClosed,
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl MenuError {
    /// User-input errors that leave the current menu running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MenuError::InvalidSelection { .. }
                | MenuError::MalformedInput(_)
                | MenuError::DivisionByZero
        )
    }
}
