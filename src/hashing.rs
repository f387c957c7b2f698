//! Piece hashing.
//!
//! A torrent's files are treated as one byte stream in file-list order. The
//! stream is cut into pieces of a fixed power-of-two length (the last piece
//! may be shorter) and every piece is hashed with SHA1. Pieces freely span
//! file boundaries.
//!
//! Hashing can be spread over a fixed number of worker threads. Each worker
//! gets a contiguous range of piece indices decided before any thread
//! starts, reads its own byte ranges, and writes only its own slots of the
//! digest array, so the output is identical for any thread count.
//!
//! # Examples
//!
//! ```no_run
//! use mktorrent::files::FileList;
//! use mktorrent::hashing::hash_pieces;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let files = FileList::from_target("path/to/content".as_ref())?;
//! let pieces = hash_pieces(&files, 1 << 18, 4)?;
//! assert_eq!(pieces.to_bytes().len(), pieces.len() * 20);
//! # Ok(())
//! # }
//! ```

mod error;
mod pieces;
mod pipeline;
mod reader;

pub use error::HashError;
pub use pieces::{PieceDigest, PieceHashes};
pub use pipeline::hash_pieces;
pub use reader::PieceReader;
