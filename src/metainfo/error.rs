use std::path::PathBuf;

use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors in user-supplied options, detected before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No announce URL was given.
    #[error("must specify an announce URL")]
    MissingAnnounce,

    /// An announce tier contained no URLs.
    #[error("empty announce tier")]
    EmptyTier,

    /// The piece length exponent is outside the supported range.
    #[error("the piece length must be a number between {min} and {max}, got {got}")]
    InvalidPieceLength { got: u32, min: u32, max: u32 },

    /// The hashing thread count is outside the supported range.
    #[error("the number of threads must be a number between {min} and {max}, got {got}")]
    InvalidThreads { got: usize, min: usize, max: usize },

    /// The torrent name is empty.
    #[error("torrent name must not be empty")]
    MissingName,
}

/// Errors that can occur while serializing or writing a metainfo file.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// Encoding the metainfo dictionary failed.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// Writing the temporary output file failed.
    #[error("error writing '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving the finished file into place failed.
    #[error("error moving metainfo into '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
