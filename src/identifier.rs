//! Short, stable identifiers for scanned sources.
//!
//! Source paths are long and noisy, so every source is addressed by the first
//! [`SOURCE_ID_LEN`] hex characters of the SHA-256 digest of its path.
//!
//! Truncation can collide. Collisions are not detected: two paths sharing an
//! identifier are indistinguishable to lookups, and the first source in
//! report order wins.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const SOURCE_ID_LEN: usize = 12;

/// Derives the identifier of a source from its path.
///
/// # Example
///
/// ```
/// use osv_viewer::identifier::source_id;
///
/// let id = source_id("/app/package-lock.json");
/// assert_eq!(id.len(), 12);
/// assert_eq!(id, source_id("/app/package-lock.json"));
/// ```
pub fn source_id(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(SOURCE_ID_LEN);
    id
}
