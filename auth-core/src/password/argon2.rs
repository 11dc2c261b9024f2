use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Uses Argon2id with a fresh random salt per hash. The cost
/// parameters are tunable so deployments can raise them as hardware
/// improves; `new` picks the library's secure baseline.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a password hasher with default cost parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a password hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Time cost (number of passes)
    /// * `parallelism` - Degree of parallelism (lanes)
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside Argon2's valid range
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest
    /// in one string, so no separate salt storage is needed)
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing computation could not complete
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC-format hash.
    ///
    /// Returns false on mismatch, on a malformed hash, and on any
    /// internal failure. Callers get a single yes/no answer; the
    /// reason for a "no" is deliberately not observable.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_verify_repeatable() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("pw").expect("Failed to hash password");

        // Verification is stable across repeated calls
        for _ in 0..3 {
            assert!(hasher.verify("pw", &hash));
        }
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").expect("Failed to hash");
        let second = hasher.hash("same_password").expect("Failed to hash");

        // Fresh salt per call: different digests, both verify
        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first));
        assert!(hasher.verify("same_password", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false_not_error() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$truncated"));
    }

    #[test]
    fn test_with_params() {
        // Small but valid cost for test speed
        let hasher = PasswordHasher::with_params(8192, 1, 1).expect("Valid params rejected");

        let hash = hasher.hash("pw").expect("Failed to hash password");
        assert!(hasher.verify("pw", &hash));
        assert!(!hasher.verify("other", &hash));
    }

    #[test]
    fn test_with_invalid_params() {
        // Memory below Argon2's minimum
        let result = PasswordHasher::with_params(1, 1, 1);
        assert!(matches!(result, Err(PasswordError::InvalidParams(_))));
    }

    #[test]
    fn test_cross_cost_verification() {
        // A hash carries its own parameters, so a hasher configured
        // with different costs still verifies it
        let low_cost = PasswordHasher::with_params(8192, 1, 1).expect("Valid params rejected");
        let default = PasswordHasher::new();

        let hash = low_cost.hash("pw").expect("Failed to hash password");
        assert!(default.verify("pw", &hash));
    }
}
