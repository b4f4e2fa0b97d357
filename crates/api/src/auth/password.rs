//! Argon2id password hashing and verification.
//!
//! Every password is combined with the server-held salt via
//! [`salted_password`] before it reaches the hasher. Argon2 additionally
//! embeds its own random per-hash salt in the PHC string it produces.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sticky_core::credentials::salted_password;

/// Hash `password + server_salt` using Argon2id.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    password: &str,
    server_salt: &str,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let combined = salted_password(password, server_salt);
    let hash = Argon2::default().hash_password(combined.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify `password + server_salt` against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch. The comparison is
/// constant-time inside the argon2 verifier.
pub fn verify_password(
    password: &str,
    server_salt: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    let combined = salted_password(password, server_salt);
    match Argon2::default().verify_password(combined.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
