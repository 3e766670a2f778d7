use std::fmt;

/// Result type for notedays operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the notedays crates
#[derive(Debug)]
pub enum Error {
    /// A note could not be read
    Io(std::io::Error),
    /// A view could not be displayed
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Render(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
