//! Hashing utilities

use sha2::{Sha512_256, Digest};

/// SHA-512/256 digest of `data`
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512_256::new();
    hasher.update(data);
    let hash = hasher.finalize();
    
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}
