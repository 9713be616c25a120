use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a list configuration file.
///
/// Entry files never fail; only the INI itself can.
#[derive(Debug, Error)]
pub enum ListConfigError {
    #[error("list configuration not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("list configuration {} unreadable: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid list configuration {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
}

impl ListConfigError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &Path, source: ini::ParseError) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}
