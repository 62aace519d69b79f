//! Password hashing.

use tessera_core::crypto::Hasher;

/// One-way password hashing over the configured secret.
///
/// Uses the same keyed digest as token key derivation, so a password
/// hash is only comparable within one deployment.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    hasher: Hasher,
}

impl PasswordHasher {
    /// Creates a password hasher from the shared keyed hash.
    #[must_use]
    pub fn new(hasher: Hasher) -> Self {
        Self { hasher }
    }

    /// Returns the hash to store for the given plaintext password.
    pub fn hash_password(&self, password: &str) -> String {
        self.hasher.digest(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic_per_secret() {
        let hasher = Hasher::new("test-secret").expect("hasher");
        let passwords = PasswordHasher::new(hasher);

        assert_eq!(
            passwords.hash_password("hunter2!"),
            passwords.hash_password("hunter2!")
        );
        assert_ne!(
            passwords.hash_password("hunter2!"),
            passwords.hash_password("hunter3!")
        );
    }
}
