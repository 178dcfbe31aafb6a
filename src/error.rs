//! Crate-level error types.

use std::fmt;

/// Errors produced by the dragcam crate.
///
/// The controller itself never fails; only the options layer touches the
/// filesystem and parsers.
#[derive(Debug)]
pub enum DragCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for DragCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DragCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for DragCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_prefixes_category() {
        let err = DragCamError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DragCamError::from(io);
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
