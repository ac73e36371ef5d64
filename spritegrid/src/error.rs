use std::io;
use std::path::{Path, PathBuf};

/// Error produced while loading sources or writing sheet outputs.
///
/// Read and decode failures are per-input and are reported through
/// [`LoadReport::failures`](crate::LoadReport) rather than aborting a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("sheet of {width}x{height} pixels exceeds the maximum canvas size")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("failed to write mapping: {0}")]
    Stream(#[source] io::Error),

    #[error("failed to serialize mapping: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => Some(path),
            Self::CanvasTooLarge { .. } | Self::Stream(_) | Self::Serialize(_) => None,
        }
    }

    /// Whether the error only affects a single input and the run can go on.
    pub fn is_per_input(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Decode { .. })
    }
}
