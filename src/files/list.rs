use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::FilesError;
use super::walker::walk;
use crate::constants::MAX_OPEN_DIRS;

/// How the content was laid out on disk.
///
/// Decides between the single-file (`length`) and multi-file (`files`)
/// forms of the info dictionary. A directory holding one file is still
/// [`Layout::Directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleFile,
    Directory,
}

/// A file included in the torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    length: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, length: u64) -> Self {
        Self {
            path: path.into(),
            length,
        }
    }

    /// Path relative to the content root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Raw path bytes; the sort key of the file list.
    pub fn path_bytes(&self) -> &[u8] {
        self.path.as_os_str().as_encoded_bytes()
    }

    /// Path segments as written to the `path` list of a `files` entry.
    pub fn segments(&self) -> impl Iterator<Item = &OsStr> {
        self.path.iter()
    }
}

/// Files of a torrent in the order their bytes are concatenated for hashing.
///
/// Entries are kept sorted by byte-wise comparison of their relative path,
/// which is what `strcmp` on the joined path would give. Comparing
/// [`Path`]s component-wise would order `a/b` before `a-b` and change piece
/// hashes relative to other tools.
#[derive(Debug, Clone)]
pub struct FileList {
    base: PathBuf,
    layout: Layout,
    entries: Vec<FileEntry>,
    total_length: u64,
}

impl FileList {
    /// Creates an empty list whose entry paths are relative to `base`.
    pub fn new(base: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            base: base.into(),
            layout,
            entries: Vec::new(),
            total_length: 0,
        }
    }

    /// Builds the file list for a target that may be a file or a directory.
    pub fn from_target(target: &Path) -> Result<Self, FilesError> {
        let metadata = std::fs::metadata(target).map_err(|source| FilesError::Stat {
            path: target.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            Self::from_directory(target, MAX_OPEN_DIRS)
        } else if metadata.is_file() {
            Self::single_file(target, metadata.len())
        } else {
            Err(FilesError::UnsupportedFileType(target.to_path_buf()))
        }
    }

    /// A list holding exactly `path`, stored under its file name.
    pub fn single_file(path: &Path, length: u64) -> Result<Self, FilesError> {
        let name = path
            .file_name()
            .ok_or_else(|| FilesError::NoFileName(path.to_path_buf()))?;
        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut list = Self::new(base, Layout::SingleFile);
        list.insert(PathBuf::from(name), length);
        Ok(list)
    }

    /// Collects every readable regular file below `dir`.
    pub fn from_directory(dir: &Path, max_open: usize) -> Result<Self, FilesError> {
        let mut list = Self::new(dir, Layout::Directory);
        walk(dir, max_open, |path, metadata| {
            info!("Adding {}", path.display());
            list.insert(path.to_path_buf(), metadata.len());
        })?;
        Ok(list)
    }

    /// Inserts a file at its sorted position and adds its length to the total.
    ///
    /// Returns `false` and leaves the list unchanged if the path is already
    /// present.
    pub fn insert(&mut self, path: PathBuf, length: u64) -> bool {
        let entry = FileEntry::new(path, length);
        match self
            .entries
            .binary_search_by(|probe| probe.path_bytes().cmp(entry.path_bytes()))
        {
            Ok(_) => false,
            Err(index) => {
                self.entries.insert(index, entry);
                self.total_length += length;
                true
            }
        }
    }

    /// Directory the entry paths are relative to.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_single_file(&self) -> bool {
        self.layout == Layout::SingleFile
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Sum of all entry lengths.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Number of pieces of `piece_length` bytes covering the content.
    pub fn piece_count(&self, piece_length: u64) -> u64 {
        self.total_length.div_ceil(piece_length)
    }

    /// Location of `entry` on disk.
    pub fn disk_path(&self, entry: &FileEntry) -> PathBuf {
        self.base.join(&entry.path)
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
