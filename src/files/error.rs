use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("error stat'ing '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("'{0}' is neither a directory nor a regular file")]
    UnsupportedFileType(PathBuf),

    #[error("error walking '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("'{0}' has no file name")]
    NoFileName(PathBuf),
}
