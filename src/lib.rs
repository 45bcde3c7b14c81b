#![deny(clippy::all)]

//! Merkle-root commitments over address allow-lists.
//!
//! A member list is hashed into a sorted leaf layer and combined pairwise
//! under a sorted-pair rule into a single root, the published commitment.
//! Any listed member can later be proven in with a compact sibling path,
//! and a verifier holding only the `(leaf, proof, root)` triple recomputes
//! the root without seeing the list.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::registry::WhitelistRegistry;
pub use domain::hash::keccak::Keccak256Sorted;
pub use domain::hash::sha256::Sha256Sorted;
pub use domain::hash::HashMethod;
pub use domain::proof::MerkleProof;
pub use domain::tree::MerkleTree;
pub use error::{MerkleError, Result};

/// Default engine configuration: Keccak-256 with sorted pairs, matching
/// EVM-side verifiers.
pub type AllowlistTree = MerkleTree<Keccak256Sorted>;
pub type AllowlistProof = MerkleProof<Keccak256Sorted>;
