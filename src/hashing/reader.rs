use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Take};

use super::error::HashError;
use crate::files::FileList;

/// Sequential reader over the concatenation of a [`FileList`]'s files.
///
/// The reader may start anywhere in the stream; it locates the file holding
/// the starting offset from the entry lengths alone. At most one file is
/// open at a time and each file is closed as soon as its last byte has been
/// consumed. Every file is read only up to the length recorded when it was
/// added, so files that grow afterwards do not shift later pieces.
pub struct PieceReader<'a> {
    files: &'a FileList,
    index: usize,
    file_offset: u64,
    current: Option<Take<File>>,
}

impl<'a> PieceReader<'a> {
    /// Creates a reader positioned at the start of the stream.
    pub fn new(files: &'a FileList) -> Self {
        Self {
            files,
            index: 0,
            file_offset: 0,
            current: None,
        }
    }

    /// Creates a reader positioned at byte `offset` of the stream.
    ///
    /// Offsets at or past the end leave the reader exhausted.
    pub fn at_offset(files: &'a FileList, mut offset: u64) -> Self {
        let mut index = 0;
        for entry in files.iter() {
            if offset < entry.length() {
                break;
            }
            offset -= entry.length();
            index += 1;
        }

        Self {
            files,
            index,
            file_offset: offset,
            current: None,
        }
    }

    /// Fills `buf` with the next `buf.len()` bytes of the stream, crossing
    /// file boundaries as needed. `piece` is used for error reporting.
    pub fn read_piece(&mut self, piece: usize, buf: &mut [u8]) -> Result<(), HashError> {
        let files = self.files;
        let mut filled = 0;

        while filled < buf.len() {
            let Some(entry) = files.entries().get(self.index) else {
                return Err(HashError::UnexpectedEof(piece));
            };

            if self.file_offset >= entry.length() {
                self.advance();
                continue;
            }

            let path = files.disk_path(entry);
            let mut reader = match self.current.take() {
                Some(reader) => reader,
                None => {
                    let mut file = File::open(&path).map_err(|source| HashError::Open {
                        path: path.clone(),
                        source,
                    })?;
                    if self.file_offset > 0 {
                        file.seek(SeekFrom::Start(self.file_offset))
                            .map_err(|source| HashError::Read {
                                path: path.clone(),
                                source,
                            })?;
                    }
                    file.take(entry.length() - self.file_offset)
                }
            };

            let n = match reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(HashError::Truncated {
                        path,
                        expected: entry.length(),
                    });
                }
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    self.current = Some(reader);
                    continue;
                }
                Err(source) => return Err(HashError::Read { path, source }),
            };

            filled += n;
            self.file_offset += n as u64;
            if self.file_offset == entry.length() {
                self.advance();
            } else {
                self.current = Some(reader);
            }
        }

        Ok(())
    }

    fn advance(&mut self) {
        self.current = None;
        self.index += 1;
        self.file_offset = 0;
    }
}
