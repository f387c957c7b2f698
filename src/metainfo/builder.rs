use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use tracing::info;

use super::config::MetainfoConfig;
use super::error::MetainfoError;
use crate::bencode::{encode, encode_to, BencodeError, Value};
use crate::files::FileList;
use crate::hashing::PieceHashes;

/// Assembles the metainfo dictionary from a configuration, the file list
/// and the piece digests.
///
/// # Examples
///
/// ```
/// use mktorrent::files::{FileList, Layout};
/// use mktorrent::hashing::PieceHashes;
/// use mktorrent::metainfo::{MetainfoBuilder, MetainfoConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MetainfoConfig::builder("empty")
///     .announce("http://t1")?
///     .no_creation_date(true)
///     .build()?;
/// let files = FileList::new(".", Layout::Directory);
/// let pieces = PieceHashes::default();
///
/// let bytes = MetainfoBuilder::new(&config, &files, &pieces).to_bytes()?;
/// assert!(bytes.starts_with(b"d8:announce9:http://t1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MetainfoBuilder<'a> {
    config: &'a MetainfoConfig,
    files: &'a FileList,
    pieces: &'a PieceHashes,
    creation_date: Option<i64>,
}

impl<'a> MetainfoBuilder<'a> {
    pub fn new(config: &'a MetainfoConfig, files: &'a FileList, pieces: &'a PieceHashes) -> Self {
        Self {
            config,
            files,
            pieces,
            creation_date: None,
        }
    }

    /// Sets the creation date (Unix timestamp) instead of using the current time.
    ///
    /// Ignored when the configuration disables the creation date.
    pub fn creation_date(mut self, timestamp: i64) -> Self {
        self.creation_date = Some(timestamp);
        self
    }

    /// Builds the top-level metainfo dictionary.
    pub fn build(&self) -> Value {
        let mut root = BTreeMap::new();
        root.insert(Bytes::from_static(b"info"), self.build_info());
        self.add_common_fields(&mut root);
        Value::Dict(root)
    }

    /// Returns the bencoded metainfo.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MetainfoError> {
        Ok(encode(&self.build())?)
    }

    /// Writes the metainfo to the configured output path.
    ///
    /// The file is written to a temporary file next to the destination and
    /// renamed over it once complete, so a failed run never leaves a partial
    /// torrent behind.
    pub fn write(&self) -> Result<(), MetainfoError> {
        let output = self.config.output();
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_err = |source: std::io::Error| MetainfoError::Write {
            path: output.to_path_buf(),
            source,
        };

        let mut temp_builder = tempfile::Builder::new();
        // Same mode as a plain `File::create`; the umask still applies.
        #[cfg(unix)]
        temp_builder.permissions(std::fs::Permissions::from_mode(0o666));

        let temp = temp_builder.tempfile_in(dir).map_err(write_err)?;
        let mut writer = BufWriter::new(temp);
        self.write_to(&mut writer, output)?;
        writer.flush().map_err(write_err)?;
        let temp = writer
            .into_inner()
            .map_err(|e| write_err(e.into_error()))?;
        temp.as_file().sync_all().map_err(write_err)?;

        temp.persist(output).map_err(|e| MetainfoError::Persist {
            path: output.to_path_buf(),
            source: e.error,
        })?;

        info!("Wrote {}", output.display());
        Ok(())
    }

    /// Streams the encoding into `writer`. I/O failures are reported
    /// against `path`.
    pub(super) fn write_to<W: Write>(&self, writer: &mut W, path: &Path) -> Result<(), MetainfoError> {
        encode_to(&self.build(), writer).map_err(|err| match err {
            BencodeError::Io(source) => MetainfoError::Write {
                path: path.to_path_buf(),
                source,
            },
            other => MetainfoError::Bencode(other),
        })
    }

    fn build_info(&self) -> Value {
        let mut info = BTreeMap::new();

        info.insert(Bytes::from_static(b"name"), Value::string(self.config.name()));
        info.insert(
            Bytes::from_static(b"piece length"),
            Value::Integer(self.config.piece_length() as i64),
        );
        info.insert(
            Bytes::from_static(b"pieces"),
            Value::Bytes(self.pieces.to_bytes()),
        );

        if self.config.private() {
            info.insert(Bytes::from_static(b"private"), Value::Integer(1));
        }

        if self.files.is_single_file() {
            info.insert(
                Bytes::from_static(b"length"),
                Value::Integer(self.files.total_length() as i64),
            );
        } else {
            info.insert(Bytes::from_static(b"files"), self.build_files_list());
        }

        Value::Dict(info)
    }

    fn build_files_list(&self) -> Value {
        self.files
            .iter()
            .map(|entry| {
                let mut file_dict = BTreeMap::new();
                file_dict.insert(
                    Bytes::from_static(b"length"),
                    Value::Integer(entry.length() as i64),
                );

                let path: Vec<Value> = entry
                    .segments()
                    .map(|segment| Value::bytes(segment.as_encoded_bytes()))
                    .collect();
                file_dict.insert(Bytes::from_static(b"path"), Value::List(path));

                Value::Dict(file_dict)
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn add_common_fields(&self, root: &mut BTreeMap<Bytes, Value>) {
        let announce_list = self.config.announce_list();

        if let Some(primary) = announce_list.primary() {
            root.insert(Bytes::from_static(b"announce"), Value::string(primary));
        }

        if announce_list.has_backups() {
            let tiers: Vec<Value> = announce_list
                .tiers()
                .iter()
                .map(|tier| Value::List(tier.urls().iter().map(|url| Value::string(url)).collect()))
                .collect();
            root.insert(Bytes::from_static(b"announce-list"), Value::List(tiers));
        }

        if let Some(comment) = self.config.comment() {
            root.insert(Bytes::from_static(b"comment"), Value::string(comment));
        }

        root.insert(
            Bytes::from_static(b"created by"),
            Value::string(self.config.created_by()),
        );

        if !self.config.no_creation_date() {
            let timestamp = self.creation_date.unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs() as i64)
                    .unwrap_or(0)
            });
            root.insert(
                Bytes::from_static(b"creation date"),
                Value::Integer(timestamp),
            );
        }

        if let Some(encoding) = self.config.encoding() {
            root.insert(Bytes::from_static(b"encoding"), Value::string(encoding));
        }

        match self.config.web_seeds() {
            [] => {}
            [url] => {
                root.insert(Bytes::from_static(b"url-list"), Value::string(url));
            }
            urls => {
                let list = urls.iter().map(|url| Value::string(url)).collect();
                root.insert(Bytes::from_static(b"url-list"), Value::List(list));
            }
        }
    }
}

/// Serializes and atomically writes the metainfo for `files` and `pieces`
/// to `config.output()`.
pub fn write_metainfo(
    config: &MetainfoConfig,
    files: &FileList,
    pieces: &PieceHashes,
) -> Result<(), MetainfoError> {
    MetainfoBuilder::new(config, files, pieces).write()
}
