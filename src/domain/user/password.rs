//! Password hashing with bcrypt.

use crate::domain::foundation::StorageError;

/// Work factor used for stored passwords.
pub const DEFAULT_COST: u32 = 12;

/// Hashes and verifies passwords at a fixed bcrypt cost.
///
/// Both operations are CPU-bound; async callers run them on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produces a 60-character bcrypt hash.
    pub fn hash(&self, password: &str) -> Result<String, StorageError> {
        bcrypt::hash(password, self.cost).map_err(StorageError::hashing)
    }

    /// Checks a password against a stored hash.
    ///
    /// A malformed hash is a storage failure, not a wrong password.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, StorageError> {
        bcrypt::verify(password, hash.trim_end()).map_err(StorageError::hashing)
    }

    /// Runs [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_blocking(&self, password: String) -> Result<String, StorageError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(StorageError::hashing)?
    }

    /// Runs [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_blocking(
        &self,
        password: String,
        hash: String,
    ) -> Result<bool, StorageError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(StorageError::hashing)?
    }

    /// Verification for an account that does not exist.
    ///
    /// Spends one bcrypt derivation at this hasher's cost, the same work as
    /// [`verify_blocking`](Self::verify_blocking), and never matches.
    pub async fn verify_missing_blocking(&self, password: String) -> Result<bool, StorageError> {
        self.hash_blocking(password).await.map(|_| false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn hash_is_bcrypt_sized_and_not_plaintext() {
        let hash = hasher().hash("validPa$$word").unwrap();
        assert_eq!(hash.len(), 60);
        assert!(hash.starts_with("$2"));
        assert!(!hash.contains("validPa$$word"));
    }

    #[test]
    fn verify_accepts_right_password_only() {
        let h = hasher();
        let hash = h.hash("validPa$$word").unwrap();
        assert!(h.verify("validPa$$word", &hash).unwrap());
        assert!(!h.verify("wrongPa$$word", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(hasher().verify("anything", "not-a-hash").is_err());
    }

    #[test]
    fn default_cost_is_twelve() {
        assert_eq!(PasswordHasher::default().cost(), 12);
    }

    #[tokio::test]
    async fn verify_missing_never_matches() {
        let h = hasher();
        assert!(!h
            .verify_missing_blocking("validPa$$word".to_string())
            .await
            .unwrap());
        assert!(!h.verify_missing_blocking(String::new()).await.unwrap());
    }

    #[tokio::test]
    async fn blocking_variants_agree() {
        let h = hasher();
        let hash = h.hash_blocking("validPa$$word".to_string()).await.unwrap();
        assert!(h
            .verify_blocking("validPa$$word".to_string(), hash)
            .await
            .unwrap());
    }
}
