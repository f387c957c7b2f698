//! Torrent metainfo creation ([BEP-3], [BEP-12], [BEP-19], [BEP-27]).
//!
//! A metainfo file is a bencoded dictionary:
//!
//! - **announce** - Primary tracker URL
//! - **announce-list** - Tracker tiers, present when more than one URL was given
//! - **comment** - Optional free-form comment
//! - **created by** - Name and version of the creating tool
//! - **creation date** - Unix timestamp, unless disabled
//! - **url-list** - Optional web seed URL(s)
//! - **info**
//!   - `name` - Suggested file/directory name
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated SHA1 hashes of each piece
//!   - `private` - `1` for private torrents
//!   - `length` (single file) OR `files` (directory), each file with
//!     `length` and `path` as a list of path segments
//!
//! [`MetainfoConfig`] carries the user's choices; [`MetainfoBuilder`] turns
//! a configuration, a [`FileList`](crate::files::FileList) and its
//! [`PieceHashes`](crate::hashing::PieceHashes) into the dictionary and
//! writes it out.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-12]: http://bittorrent.org/beps/bep_0012.html
//! [BEP-19]: http://bittorrent.org/beps/bep_0019.html
//! [BEP-27]: http://bittorrent.org/beps/bep_0027.html

mod announce;
mod builder;
mod config;
mod error;

pub use announce::{AnnounceList, AnnounceTier};
pub use builder::{write_metainfo, MetainfoBuilder};
pub use config::{MetainfoConfig, MetainfoConfigBuilder};
pub use error::{ConfigError, MetainfoError};
