//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and verification of salted passwords.
//! - [`credentials`] -- the credential store: user lookup, registration, login checks.
//! - [`session`] -- signed session cookie and the [`session::Identity`] extractor.

pub mod credentials;
pub mod password;
pub mod session;
