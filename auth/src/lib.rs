//! Authentication library for the catalog service.
//!
//! Provides the three primitives behind the login flow and the bearer-token
//! gate:
//! - Password hashing and verification (Argon2id, per-hash random salt)
//! - JWT issuance and validation (HS256, time-limited)
//! - An [`Authenticator`] coordinating the two
//!
//! The signing secret is injected at construction and never leaves this
//! crate. Tokens are stateless; there is no server-side revocation list.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("secret123").unwrap();
//!
//! // Login: verify the password and issue a token
//! let claims = Claims::for_subject("alice", 1);
//! let result = auth.authenticate("secret123", &hash, &claims).unwrap();
//!
//! // Gate: validate the presented token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
