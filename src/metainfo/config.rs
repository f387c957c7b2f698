use std::path::{Path, PathBuf};

use tracing::info;

use super::announce::{AnnounceList, AnnounceTier};
use super::error::ConfigError;
use crate::constants::{
    CREATED_BY, DEFAULT_PIECE_LENGTH_EXP, DEFAULT_THREADS, MAX_PIECE_LENGTH_EXP, MAX_THREADS,
    MIN_PIECE_LENGTH_EXP, MIN_THREADS, TORRENT_EXTENSION,
};

/// Everything needed to produce a metainfo file besides the content itself.
///
/// Built once through [`MetainfoConfigBuilder`], which validates all values,
/// and read-only afterwards.
///
/// # Examples
///
/// ```
/// use mktorrent::metainfo::MetainfoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MetainfoConfig::builder("ubuntu.iso")
///     .announce("http://tracker.example.com/announce")?
///     .piece_length_exp(20)
///     .private(true)
///     .build()?;
///
/// assert_eq!(config.piece_length(), 1 << 20);
/// assert_eq!(config.output().to_str(), Some("ubuntu.iso.torrent"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MetainfoConfig {
    announce_list: AnnounceList,
    comment: Option<String>,
    created_by: String,
    encoding: Option<String>,
    no_creation_date: bool,
    piece_length_exp: u32,
    name: String,
    output: PathBuf,
    private: bool,
    web_seeds: Vec<String>,
    threads: usize,
    verbose: bool,
}

impl MetainfoConfig {
    pub fn builder(name: impl Into<String>) -> MetainfoConfigBuilder {
        MetainfoConfigBuilder::new(name)
    }

    pub fn announce_list(&self) -> &AnnounceList {
        &self.announce_list
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Whether the `creation date` key is left out.
    pub fn no_creation_date(&self) -> bool {
        self.no_creation_date
    }

    pub fn piece_length_exp(&self) -> u32 {
        self.piece_length_exp
    }

    /// Piece length in bytes, `2^piece_length_exp`.
    pub fn piece_length(&self) -> u64 {
        1u64 << self.piece_length_exp
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn private(&self) -> bool {
        self.private
    }

    pub fn web_seeds(&self) -> &[String] {
        &self.web_seeds
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Logs the resolved options.
    pub fn log_options(&self) {
        info!("Announce URLs:\n{}", self.announce_list);
        info!("Torrent name: {}", self.name);
        info!("Metafile:     {}", self.output.display());
        info!("Piece length: {}", self.piece_length());
        info!("Threads:      {}", self.threads);
        info!(
            "Write date:   {}",
            if self.no_creation_date { "no" } else { "yes" }
        );
        if self.web_seeds.is_empty() {
            info!("Web Seed URL: none");
        }
        for url in &self.web_seeds {
            info!("Web Seed URL: {}", url);
        }
        match &self.comment {
            Some(comment) => info!("Comment:      \"{}\"", comment),
            None => info!("Comment:      none"),
        }
    }
}

/// Builder for [`MetainfoConfig`].
#[derive(Debug)]
pub struct MetainfoConfigBuilder {
    announce_list: AnnounceList,
    comment: Option<String>,
    created_by: String,
    encoding: Option<String>,
    no_creation_date: bool,
    piece_length_exp: u32,
    name: String,
    output: Option<PathBuf>,
    private: bool,
    web_seeds: Vec<String>,
    threads: usize,
    verbose: bool,
}

impl MetainfoConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            announce_list: AnnounceList::new(),
            comment: None,
            created_by: CREATED_BY.to_string(),
            encoding: None,
            no_creation_date: false,
            piece_length_exp: DEFAULT_PIECE_LENGTH_EXP,
            name: name.into(),
            output: None,
            private: false,
            web_seeds: Vec::new(),
            threads: DEFAULT_THREADS,
            verbose: false,
        }
    }

    /// Appends a tier parsed from `<url>[,<url>]*`.
    pub fn announce(self, urls: &str) -> Result<Self, ConfigError> {
        Ok(self.announce_tier(AnnounceTier::parse(urls)?))
    }

    pub fn announce_tier(mut self, tier: AnnounceTier) -> Self {
        self.announce_list.push(tier);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn no_creation_date(mut self, no_creation_date: bool) -> Self {
        self.no_creation_date = no_creation_date;
        self
    }

    /// Sets the piece length to `2^exp` bytes.
    pub fn piece_length_exp(mut self, exp: u32) -> Self {
        self.piece_length_exp = exp;
        self
    }

    /// Sets the output path. Defaults to `<name>.torrent`.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn web_seed(mut self, url: impl Into<String>) -> Self {
        self.web_seeds.push(url.into());
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<MetainfoConfig, ConfigError> {
        if !(MIN_PIECE_LENGTH_EXP..=MAX_PIECE_LENGTH_EXP).contains(&self.piece_length_exp) {
            return Err(ConfigError::InvalidPieceLength {
                got: self.piece_length_exp,
                min: MIN_PIECE_LENGTH_EXP,
                max: MAX_PIECE_LENGTH_EXP,
            });
        }

        if self.announce_list.is_empty() {
            return Err(ConfigError::MissingAnnounce);
        }

        if !(MIN_THREADS..=MAX_THREADS).contains(&self.threads) {
            return Err(ConfigError::InvalidThreads {
                got: self.threads,
                min: MIN_THREADS,
                max: MAX_THREADS,
            });
        }

        if self.name.is_empty() {
            return Err(ConfigError::MissingName);
        }

        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", self.name, TORRENT_EXTENSION)));

        Ok(MetainfoConfig {
            announce_list: self.announce_list,
            comment: self.comment,
            created_by: self.created_by,
            encoding: self.encoding,
            no_creation_date: self.no_creation_date,
            piece_length_exp: self.piece_length_exp,
            name: self.name,
            output,
            private: self.private,
            web_seeds: self.web_seeds,
            threads: self.threads,
            verbose: self.verbose,
        })
    }
}
