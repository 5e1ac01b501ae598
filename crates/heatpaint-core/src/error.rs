use std::path::PathBuf;
use time::Date;

/// Failures of the pattern-to-schedule transform.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// Unknown mode selector, out-of-range sample, or otherwise unusable argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Image file missing, unreadable, or undecodable.
    #[error("cannot read input {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    /// Pixel buffer does not describe a valid grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("date out of range: {offset_days} days after {start}")]
    DateOutOfRange { start: Date, offset_days: i64 },
}

impl ArtError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn input(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Input {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_descriptive() {
        let e = ArtError::invalid_argument("unknown mode 'video'");
        assert_eq!(e.to_string(), "invalid argument: unknown mode 'video'");

        let e = ArtError::input("/tmp/missing.png", "No such file or directory");
        assert!(e.to_string().contains("/tmp/missing.png"));
        assert!(e.to_string().contains("No such file"));
    }
}
