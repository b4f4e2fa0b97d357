//! Login input rules and the password + salt combination.
//!
//! Registration and verification must feed the hasher the exact same bytes,
//! so both go through [`salted_password`].

use crate::error::CoreError;

/// Longest accepted username, in characters (`VARCHAR(255)`).
pub const MAX_USERNAME_CHARS: usize = 255;

/// Longest accepted password, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 1024;

/// Validate the `username` / `password` pair submitted to login.
///
/// Both must be non-empty and within their length limits. The username may
/// not start or end with whitespace: the `user` table compares with
/// `utf8mb4_bin`, which ignores trailing spaces, so `"alice "` would
/// otherwise collide with `"alice"`.
pub fn validate_login_fields(username: &str, password: &str) -> Result<(), CoreError> {
    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Username or Password is empty".to_string(),
        ));
    }

    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(CoreError::Validation(format!(
            "Username must be at most {MAX_USERNAME_CHARS} characters"
        )));
    }

    if username.trim() != username {
        return Err(CoreError::Validation(
            "Username must not start or end with whitespace".to_string(),
        ));
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(CoreError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }

    Ok(())
}

/// Append the server-held salt to a plaintext password.
pub fn salted_password(password: &str, salt: &str) -> String {
    let mut combined = String::with_capacity(password.len() + salt.len());
    combined.push_str(password);
    combined.push_str(salt);
    combined
}
