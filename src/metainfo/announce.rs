use std::fmt;

use super::error::ConfigError;

/// A group of tracker URLs clients try before falling back to the next tier
/// ([BEP-12]).
///
/// [BEP-12]: http://bittorrent.org/beps/bep_0012.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceTier {
    urls: Vec<String>,
}

impl AnnounceTier {
    pub fn new(urls: Vec<String>) -> Result<Self, ConfigError> {
        if urls.is_empty() {
            return Err(ConfigError::EmptyTier);
        }
        Ok(Self { urls })
    }

    /// Parses a comma separated list of URLs, `<url>[,<url>]*`.
    ///
    /// Empty items are dropped.
    ///
    /// ```
    /// use mktorrent::metainfo::AnnounceTier;
    ///
    /// let tier = AnnounceTier::parse("http://t2a,http://t2b").unwrap();
    /// assert_eq!(tier.urls(), ["http://t2a", "http://t2b"]);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Self::new(
            s.split(',')
                .filter(|url| !url.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// First URL of the tier. A tier is never empty.
    pub fn first(&self) -> &str {
        &self.urls[0]
    }
}

/// Ordered tracker tiers. The first URL of the first tier is the primary
/// `announce` URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnounceList {
    tiers: Vec<AnnounceTier>,
}

impl AnnounceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tier: AnnounceTier) {
        self.tiers.push(tier);
    }

    pub fn tiers(&self) -> &[AnnounceTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The URL written to the `announce` key.
    pub fn primary(&self) -> Option<&str> {
        self.tiers.first().map(AnnounceTier::first)
    }

    /// Whether an `announce-list` is needed, i.e. more than one URL was given.
    pub fn has_backups(&self) -> bool {
        self.tiers.len() > 1 || self.tiers.iter().any(|tier| tier.urls.len() > 1)
    }
}

impl FromIterator<AnnounceTier> for AnnounceList {
    fn from_iter<I: IntoIterator<Item = AnnounceTier>>(iter: I) -> Self {
        Self {
            tiers: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AnnounceList {
    /// Numbered tiers, one URL per line, the way the verbose option dump
    /// prints them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, tier) in self.tiers.iter().enumerate() {
            let mut urls = tier.urls.iter();
            if let Some(first) = urls.next() {
                writeln!(f, "    {} : {}", n + 1, first)?;
            }
            for url in urls {
                writeln!(f, "        {}", url)?;
            }
        }
        Ok(())
    }
}
