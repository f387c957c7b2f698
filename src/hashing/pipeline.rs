use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sha1::{Digest, Sha1};
use tracing::{debug, info};

use super::error::HashError;
use super::pieces::{PieceDigest, PieceHashes};
use super::reader::PieceReader;
use crate::constants::{MAX_THREADS, MIN_THREADS, PIECE_DIGEST_LEN};
use crate::files::FileList;

/// Hashes the concatenated content of `files` in pieces of `piece_length`
/// bytes.
///
/// With `threads == 1` a single reader streams the whole content. Otherwise
/// the piece indices are split up front into one contiguous range per
/// worker; each worker opens and reads only the bytes of its own range and
/// writes into its own slice of the digest array. The call returns once
/// every worker has finished. The result does not depend on `threads`.
///
/// Any read failure aborts hashing and no partial result is returned.
pub fn hash_pieces(
    files: &FileList,
    piece_length: u64,
    threads: usize,
) -> Result<PieceHashes, HashError> {
    if piece_length == 0 {
        return Err(HashError::ZeroPieceLength);
    }

    let piece_count = files.piece_count(piece_length);
    let count = usize::try_from(piece_count).map_err(|_| HashError::TooManyPieces(piece_count))?;

    let mut digests: Vec<PieceDigest> = Vec::new();
    digests
        .try_reserve_exact(count)
        .map_err(|_| HashError::OutOfMemory(count.saturating_mul(PIECE_DIGEST_LEN)))?;
    digests.resize(count, [0u8; PIECE_DIGEST_LEN]);

    if count == 0 {
        return Ok(PieceHashes::new(digests));
    }

    let workers = threads.clamp(MIN_THREADS, MAX_THREADS).min(count);
    let hasher = RangeHasher {
        files,
        piece_length,
        total_length: files.total_length(),
    };

    if workers == 1 {
        hasher.hash_range(0, &mut digests)?;
    } else {
        let per_worker = count.div_ceil(workers);
        debug!(
            "Hashing {} pieces with {} workers, {} pieces each",
            count, workers, per_worker
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("hasher-{i}"))
            .build()?;

        pool.install(|| {
            digests
                .par_chunks_mut(per_worker)
                .enumerate()
                .try_for_each(|(worker, slots)| hasher.hash_range(worker * per_worker, slots))
        })?;
    }

    info!("Hashed {} pieces", count);
    Ok(PieceHashes::new(digests))
}

struct RangeHasher<'a> {
    files: &'a FileList,
    piece_length: u64,
    total_length: u64,
}

impl RangeHasher<'_> {
    /// Length of piece `index`; only the last piece may be short.
    fn piece_len(&self, index: usize) -> usize {
        let start = index as u64 * self.piece_length;
        (self.total_length - start).min(self.piece_length) as usize
    }

    /// Fills `slots` with the digests of pieces `first..first + slots.len()`.
    fn hash_range(&self, first: usize, slots: &mut [PieceDigest]) -> Result<(), HashError> {
        let mut reader = PieceReader::at_offset(self.files, first as u64 * self.piece_length);

        let capacity = self.piece_len(first);
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| HashError::OutOfMemory(capacity))?;
        buf.resize(capacity, 0u8);

        for (offset, slot) in slots.iter_mut().enumerate() {
            let index = first + offset;
            let chunk = &mut buf[..self.piece_len(index)];
            reader.read_piece(index, chunk)?;
            *slot = Sha1::digest(chunk).into();
        }

        debug!("Hashed pieces {}..{}", first, first + slots.len());
        Ok(())
    }
}
