//! Error taxonomy for reading, formatting and writing vector files.

use std::io;
use std::path::PathBuf;

/// A failure that aborts a formatting or verification run.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// An expected input file does not exist.
    #[error("input file not found: {}", .path.display())]
    MissingFile {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file is not valid JSON or does not have the expected record shape.
    #[error("malformed test vectors in {}", .path.display())]
    MalformedJson {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parse error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Formatted records could not be serialized.
    #[error("failed to serialize records for {}", .path.display())]
    Serialize {
        /// Intended output file.
        path: PathBuf,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl FormatError {
    /// Maps a read failure to [`FormatError::MissingFile`] or [`FormatError::Read`].
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingFile { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// The file the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingFile { path }
            | Self::MalformedJson { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Serialize { path, .. } => path,
        }
    }
}
