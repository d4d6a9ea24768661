//! Password hashing: Argon2id with a fresh salt per hash.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AppError, AppResult};

/// Argon2id work factor: memory in KiB, passes, lanes.
///
/// Roughly the cost of bcrypt at cost 14. Every stored hash carries these values.
pub const HASH_COST: HashCost = HashCost {
    memory_kib: 64 * 1024,
    iterations: 3,
    parallelism: 1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// One-way password hasher pinned to Argon2id v0x13 at [`HASH_COST`].
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> AppResult<Self> {
        let params = Params::new(
            HASH_COST.memory_kib,
            HASH_COST.iterations,
            HASH_COST.parallelism,
            None,
        )
        .map_err(|e| AppError::Hashing(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password into a PHC string.
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::Hashing(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Check a plaintext against a stored hash. Malformed hashes verify as `false`.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hasher = PasswordHasher::new().unwrap();
        let hash = hasher.hash("mypassword").unwrap();
        assert!(hasher.verify("mypassword", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = PasswordHasher::new().unwrap();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("same", &a));
        assert!(hasher.verify("same", &b));
    }

    #[test]
    fn hash_does_not_contain_plaintext() {
        let hasher = PasswordHasher::new().unwrap();
        let hash = hasher.hash("correct-horse-battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct-horse-battery"));
    }

    #[test]
    fn hash_carries_pinned_cost() {
        let hasher = PasswordHasher::new().unwrap();
        let hash = hasher.hash("pw").unwrap();
        let expected = format!(
            "$argon2id$v=19$m={},t={},p={}$",
            HASH_COST.memory_kib, HASH_COST.iterations, HASH_COST.parallelism
        );
        assert!(hash.starts_with(&expected), "{hash}");
    }

    #[test]
    fn malformed_hash_verifies_false() {
        let hasher = PasswordHasher::new().unwrap();
        assert!(!hasher.verify("anything", "not-a-valid-hash"));
        assert!(!hasher.verify("anything", ""));
        assert!(!hasher.verify("anything", "$2a$14$abcdefghijklmnopqrstuv"));
    }

    #[test]
    fn empty_password_round_trips() {
        let hasher = PasswordHasher::new().unwrap();
        let hash = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hash));
        assert!(!hasher.verify(" ", &hash));
    }
}
