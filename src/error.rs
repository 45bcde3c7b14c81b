use thiserror::Error;

/// Errors surfaced by tree construction, proof generation, and the codec
/// adapters. Verification of a wrong proof is not an error (it returns
/// `Ok(false)`); only structurally malformed input is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerkleError {
    /// Member or address bytes rejected at ingestion time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Proof requested for a member absent from the tree, or for an
    /// unknown list id.
    #[error("member not found in the tree")]
    NotFound,

    /// A proof element (or the supplied leaf hash) is not a well-formed
    /// digest for the tree's hash method.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
