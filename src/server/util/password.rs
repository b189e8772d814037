use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hashes a plaintext password with bcrypt at the default cost (12 rounds).
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Checks a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(password, hashed)
}
