pub mod keccak;
pub mod sha256;

/// Hashing strategy for leaves and internal nodes.
pub trait HashMethod {
    /// Digest length in bytes produced by both hash functions.
    const DIGEST_SIZE: usize;

    /// Hash a member's raw bytes into a leaf digest.
    fn hash_leaf(data: &[u8]) -> Vec<u8>;

    /// Hash two sibling digests into their parent. Implementations must
    /// concatenate the pair in ascending byte order before hashing, so the
    /// combine step does not depend on which child is "left". Once a root
    /// has been published this rule is a compatibility contract shared with
    /// external verifiers.
    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8>;

    /// Root published for an empty member list.
    fn empty_root() -> Vec<u8> {
        vec![0u8; Self::DIGEST_SIZE]
    }
}
