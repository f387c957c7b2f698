//! Tool constants and tuning parameters.
//!
//! Limits here mirror the defaults of the classic `mktorrent` tool so that
//! torrents produced with default options look the same as the ones other
//! tools produce.

// ============================================================================
// Identification
// ============================================================================

/// Value written to the `created by` key.
pub const CREATED_BY: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Piece length
// ============================================================================

/// Smallest allowed piece length exponent (2^15 = 32 KiB).
pub const MIN_PIECE_LENGTH_EXP: u32 = 15;

/// Largest allowed piece length exponent (2^25 = 32 MiB).
pub const MAX_PIECE_LENGTH_EXP: u32 = 25;

/// Default piece length exponent (2^18 = 256 KiB).
pub const DEFAULT_PIECE_LENGTH_EXP: u32 = 18;

/// Width of a v1 piece digest (SHA1).
pub const PIECE_DIGEST_LEN: usize = 20;

// ============================================================================
// Hashing workers
// ============================================================================

/// Minimum number of hashing threads.
pub const MIN_THREADS: usize = 1;

/// Maximum number of hashing threads.
pub const MAX_THREADS: usize = 20;

/// Default number of hashing threads.
pub const DEFAULT_THREADS: usize = 2;

// ============================================================================
// Directory walking
// ============================================================================

/// Maximum number of directory handles the walker keeps open at once.
/// Deeper trees are still walked; remaining entries of the oldest open
/// directory are buffered in memory and its handle is closed.
pub const MAX_OPEN_DIRS: usize = 100;

/// File extension appended to the torrent name for the default output path.
pub const TORRENT_EXTENSION: &str = "torrent";
