use heatpaint_core::ArtError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Mode selector given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Image,
}

impl FromStr for InputKind {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            other => Err(ArtError::invalid_argument(format!(
                "unknown input type '{other}' (use 'text' or 'image')"
            ))),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Image => "image",
        })
    }
}

/// The pattern to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternInput {
    Text(String),
    Image(PathBuf),
}

impl PatternInput {
    /// Combine a mode selector and its content argument.
    pub fn from_args(mode: &str, content: &str) -> Result<Self, ArtError> {
        Ok(match mode.parse::<InputKind>()? {
            InputKind::Text => Self::Text(content.to_string()),
            InputKind::Image => Self::Image(PathBuf::from(content)),
        })
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::Text,
            Self::Image(_) => InputKind::Image,
        }
    }
}
