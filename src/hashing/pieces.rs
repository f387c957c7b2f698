use bytes::Bytes;

use crate::constants::PIECE_DIGEST_LEN;

/// SHA1 digest of one piece.
pub type PieceDigest = [u8; PIECE_DIGEST_LEN];

/// Piece digests indexed by piece number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceHashes {
    digests: Vec<PieceDigest>,
}

impl PieceHashes {
    pub fn new(digests: Vec<PieceDigest>) -> Self {
        Self { digests }
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PieceDigest> {
        self.digests.get(index)
    }

    pub fn as_slice(&self) -> &[PieceDigest] {
        &self.digests
    }

    /// The `pieces` blob: every digest in ascending piece order.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.digests.concat())
    }
}
