//! Common error types.

use thiserror::Error;

/// Main error type for the browser shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Window error: {0}")]
    Window(String),
}

pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ShellError::config("invalid settings file");
        assert_eq!(err.to_string(), "Configuration error: invalid settings file");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShellError = io.into();
        assert!(matches!(err, ShellError::Io(_)));
    }
}
