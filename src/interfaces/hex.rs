//! Thin codec between the engine's raw bytes and the hex-string form
//! addresses, roots, and proofs travel in. The engine itself is
//! length-agnostic over byte strings; the fixed 20-byte address check
//! lives here at the boundary.

use crate::domain::hash::HashMethod;
use crate::domain::proof::MerkleProof;
use crate::error::{MerkleError, Result};

/// Length of an address in the observed domain.
pub const ADDRESS_SIZE: usize = 20;

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Decode a hex address (with or without `0x` prefix) into its 20 raw bytes.
pub fn parse_address(s: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(strip_prefix(s))
        .map_err(|e| MerkleError::InvalidInput(format!("address '{s}' is not valid hex: {e}")))?;
    if bytes.len() != ADDRESS_SIZE {
        return Err(MerkleError::InvalidInput(format!(
            "address must be {ADDRESS_SIZE} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Render a digest as a `0x`-prefixed lower-hex string.
pub fn encode_digest(digest: &[u8]) -> String {
    format!("0x{}", hex::encode(digest))
}

/// Decode a hex digest and check it against the expected length.
pub fn parse_digest(s: &str, expected_len: usize) -> Result<Vec<u8>> {
    let bytes = hex::decode(strip_prefix(s))
        .map_err(|e| MerkleError::InvalidInput(format!("digest '{s}' is not valid hex: {e}")))?;
    if bytes.len() != expected_len {
        return Err(MerkleError::InvalidInput(format!(
            "digest must be {expected_len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Decode a proof serialized as hex strings. Any element that is not a
/// well-formed digest for `Method` is `MalformedProof`.
pub fn parse_proof<Method: HashMethod>(steps: &[String]) -> Result<MerkleProof<Method>> {
    let decoded = steps
        .iter()
        .map(|step| {
            let bytes = hex::decode(strip_prefix(step)).map_err(|e| {
                MerkleError::MalformedProof(format!("element '{step}' is not valid hex: {e}"))
            })?;
            if bytes.len() != Method::DIGEST_SIZE {
                return Err(MerkleError::MalformedProof(format!(
                    "element must be {} bytes, got {}",
                    Method::DIGEST_SIZE,
                    bytes.len()
                )));
            }
            Ok(bytes)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MerkleProof::new(decoded))
}
