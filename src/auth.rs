use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::ApiError;

/// Derive a salted one-way hash for storage. bcrypt generates a fresh salt
/// per call, so hashing the same password twice gives different hashes.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored hash. bcrypt compares in
/// constant time; `Err` only means the stored hash itself is malformed.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, ApiError> {
    Ok(verify(plaintext, password_hash)?)
}
