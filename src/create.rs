//! End-to-end torrent creation.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::files::{FileList, FilesError};
use crate::hashing::{hash_pieces, HashError};
use crate::metainfo::{MetainfoBuilder, MetainfoConfig, MetainfoError};

/// Any failure while creating a torrent. All of them end the run.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    Files(#[from] FilesError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Metainfo(#[from] MetainfoError),
}

/// What was written by [`create_torrent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentSummary {
    pub output: PathBuf,
    pub file_count: usize,
    pub total_length: u64,
    pub piece_count: usize,
    pub piece_length: u64,
}

/// Builds the file list for `target`, hashes it and writes the metainfo
/// file described by `config`.
///
/// The output file is only touched after every piece has been hashed.
pub fn create_torrent(config: &MetainfoConfig, target: &Path) -> Result<TorrentSummary, CreateError> {
    if config.verbose() {
        config.log_options();
    }

    let files = FileList::from_target(target)?;
    let piece_length = config.piece_length();

    info!(
        "{} bytes in all. That's {} pieces of {} bytes each.",
        files.total_length(),
        files.piece_count(piece_length),
        piece_length
    );

    let pieces = hash_pieces(&files, piece_length, config.threads())?;

    MetainfoBuilder::new(config, &files, &pieces).write()?;

    Ok(TorrentSummary {
        output: config.output().to_path_buf(),
        file_count: files.len(),
        total_length: files.total_length(),
        piece_count: pieces.len(),
        piece_length,
    })
}
