use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Dump file not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("IO operation failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Writer failed for page {title:?}: {message}")]
    Hook { title: String, message: String },
}

impl ExtractError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Splits a read failure into a decode error (corrupt bz2 data, bad UTF-8)
    /// or a plain IO error.
    pub fn from_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let from_codec = source
            .get_ref()
            .is_some_and(|inner| inner.is::<bzip2::Error>());
        let corrupt = matches!(
            source.kind(),
            ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof
        );
        if from_codec || corrupt {
            ExtractError::Decode {
                path: path.as_ref().to_path_buf(),
                message: source.to_string(),
            }
        } else {
            ExtractError::io(path, source)
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
