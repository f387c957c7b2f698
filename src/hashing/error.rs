use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("error opening '{path}' for reading: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is shorter than the {expected} bytes it had when it was added")]
    Truncated { path: PathBuf, expected: u64 },

    #[error("content ended before piece {0} was complete")]
    UnexpectedEof(usize),

    #[error("piece length must be non-zero")]
    ZeroPieceLength,

    #[error("out of memory allocating {0} bytes")]
    OutOfMemory(usize),

    #[error("too many pieces: {0}")]
    TooManyPieces(u64),

    #[error("failed to start hashing threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
