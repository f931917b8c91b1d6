use std::error::Error;
use std::fmt;

/// Error type for rhumb-line operations
#[derive(Debug, Clone, PartialEq)]
pub enum RhumbError {
    /// A caller-supplied argument violated an operation's precondition
    InvalidArgument(String),
}

impl fmt::Display for RhumbError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RhumbError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for RhumbError {}

impl From<String> for RhumbError {
    fn from(msg: String) -> Self {
        RhumbError::InvalidArgument(msg)
    }
}

impl From<&str> for RhumbError {
    fn from(msg: &str) -> Self {
        RhumbError::InvalidArgument(msg.to_string())
    }
}
