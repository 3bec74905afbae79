use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a single conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode subtitle text: {reason}")]
    Encoding { reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write statistics to {}: {source}", path.display())]
    Stats {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timestamp pattern: {0}")]
    Pattern(String),
}

/// Non-fatal conditions reported alongside a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionWarning {
    /// The document contained no subtitle blocks at all
    NoBlocks,
    /// Blocks were found but none of them carried any text
    AllCuesEmpty { blocks: usize },
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionWarning::NoBlocks => {
                write!(f, "no subtitle blocks found; output is empty")
            }
            ConversionWarning::AllCuesEmpty { blocks } => {
                write!(f, "{blocks} subtitle blocks found but none contain text; output is empty")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
