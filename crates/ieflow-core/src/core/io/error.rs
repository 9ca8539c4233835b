use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder path used for errors raised while reading from an in-memory stream.
pub(crate) const STREAM_PATH: &str = "<stream>";

#[derive(Debug, Error)]
pub enum IoError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error for '{path}': {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row in '{path}' at line {line}: {message}", path = path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Score file '{path}' contains no usable scores", path = path.display())]
    EmptyScoreFile { path: PathBuf },

    #[error("Table '{path}' is missing required column '{column}'", path = path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl From<std::io::Error> for IoError {
    fn from(source: std::io::Error) -> Self {
        IoError::Io {
            path: PathBuf::from(STREAM_PATH),
            source,
        }
    }
}

impl IoError {
    pub(crate) fn csv(source: csv::Error) -> Self {
        IoError::Csv {
            path: PathBuf::from(STREAM_PATH),
            source,
        }
    }

    /// Re-labels the error with the file it came from.
    pub fn at(self, file: &Path) -> Self {
        let path = file.to_path_buf();
        match self {
            IoError::Io { source, .. } => IoError::Io { path, source },
            IoError::Csv { source, .. } => IoError::Csv { path, source },
            IoError::MalformedRow { line, message, .. } => IoError::MalformedRow {
                path,
                line,
                message,
            },
            IoError::EmptyScoreFile { .. } => IoError::EmptyScoreFile { path },
            IoError::MissingColumn { column, .. } => IoError::MissingColumn { path, column },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            IoError::Io { path, .. }
            | IoError::Csv { path, .. }
            | IoError::MalformedRow { path, .. }
            | IoError::EmptyScoreFile { path }
            | IoError::MissingColumn { path, .. } => path,
        }
    }
}
