//! Authentication primitives library
//!
//! Provides the two cryptographic building blocks of the auth service:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bounded bearer tokens (HS256 JWT)
//!
//! This crate knows nothing about users, registries, or transports;
//! the service crate composes these primitives into the actual
//! register/login/validate flows.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::TokenCodec;
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(5));
//! let now = Utc::now();
//! let token = codec.issue("user-123", now).unwrap();
//! let claims = codec.verify(&token, now).unwrap();
//! assert_eq!(claims.sub, "user-123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
