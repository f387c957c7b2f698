//! Discovery of the files that make up a torrent.
//!
//! A torrent's content is either a single regular file or every regular
//! file below a directory. This module turns a target path into a
//! [`FileList`]: entries sorted byte-wise by their path relative to the
//! target, with sizes and the running total the hashing stage needs.
//!
//! # Components
//!
//! - [`walk`] - Recursive directory walk with a bounded number of open
//!   directory handles
//! - [`FileList`] - Sorted, duplicate-free sequence of [`FileEntry`] values
//! - [`Layout`] - Whether the target was a single file or a directory
//!
//! # Examples
//!
//! ```no_run
//! use mktorrent::files::FileList;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let files = FileList::from_target("path/to/content".as_ref())?;
//! for entry in files.iter() {
//!     println!("{} ({} bytes)", entry.path().display(), entry.length());
//! }
//! println!("{} bytes in all", files.total_length());
//! # Ok(())
//! # }
//! ```

mod error;
mod list;
mod walker;

pub use error::FilesError;
pub use list::{FileEntry, FileList, Layout};
pub use walker::walk;

#[cfg(test)]
mod tests;
