//! mktorrent - Create BitTorrent metainfo files
//!
//! Builds a `.torrent` file from a single file or a directory tree: the
//! content is enumerated, hashed piece by piece (optionally on several
//! threads) and serialized together with tracker and descriptive fields in
//! canonical bencode.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding
//! - [`files`] - Directory walking and the sorted file list
//! - [`hashing`] - SHA1 piece hashing over the concatenated files
//! - [`metainfo`] - Configuration and metainfo serialization
//! - [`create`] - The whole pipeline in one call
//!
//! # Example
//!
//! ```no_run
//! use mktorrent::{create_torrent, MetainfoConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MetainfoConfig::builder("my-content")
//!     .announce("http://tracker.example.com/announce")?
//!     .threads(4)
//!     .build()?;
//!
//! let summary = create_torrent(&config, "path/to/my-content".as_ref())?;
//! println!("{} pieces written to {}", summary.piece_count, summary.output.display());
//! # Ok(())
//! # }
//! ```

pub mod bencode;
pub mod constants;
pub mod create;
pub mod files;
pub mod hashing;
pub mod metainfo;

pub use bencode::{decode, encode, BencodeError, Value};
pub use create::{create_torrent, CreateError, TorrentSummary};
pub use files::{FileEntry, FileList, FilesError, Layout};
pub use hashing::{hash_pieces, HashError, PieceHashes};
pub use metainfo::{
    AnnounceList, AnnounceTier, ConfigError, MetainfoBuilder, MetainfoConfig, MetainfoError,
};
