//! Session cookie: a signed (not encrypted) token held by the browser.
//!
//! The cookie value is an HS256 JWT whose claims carry the username and user
//! id. Nothing is stored server-side; a session ends when the cookie expires,
//! is cleared by `/logout`, or its token `exp` passes.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sticky_core::types::{DbId, ANONYMOUS_USER_ID};
use time::Duration;

use crate::config::parse_flag;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Default session lifetime in seconds (one day).
const DEFAULT_MAX_AGE_SECS: i64 = 86_400;

/// Settings for signing and shaping the session cookie.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub secret: String,
    /// Cookie `Max-Age` and token lifetime in seconds.
    pub max_age_secs: i64,
    /// Whether to set the `Secure` attribute on the cookie.
    pub secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SESSION_SECRET`        | **yes**  | --      |
    /// | `SESSION_MAX_AGE_SECS`  | no       | `86400` |
    /// | `SESSION_COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let max_age_secs: i64 = std::env::var("SESSION_MAX_AGE_SECS")
            .unwrap_or_else(|_| DEFAULT_MAX_AGE_SECS.to_string())
            .parse()
            .expect("SESSION_MAX_AGE_SECS must be a valid i64");

        let secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            secret,
            max_age_secs,
            secure,
        }
    }
}

/// Claims embedded in the session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the user's id.
    pub sub: DbId,
    pub username: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Who is making the request, as established by the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated { username: String, user_id: DbId },
    Anonymous,
}

impl Identity {
    /// The acting user id, or `0` for anonymous requests.
    pub fn user_id_or_anonymous(&self) -> DbId {
        match self {
            Identity::Authenticated { user_id, .. } => *user_id,
            Identity::Anonymous => ANONYMOUS_USER_ID,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Identity::Authenticated { username, .. } => Some(username),
            Identity::Anonymous => None,
        }
    }
}

/// Sign a session token for the given user.
pub fn encode_session(
    username: &str,
    user_id: DbId,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id,
        username: username.to_string(),
        iat: now,
        exp: now + config.max_age_secs,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a session token's signature and expiry, returning its claims.
pub fn decode_session(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Build the `Set-Cookie` value establishing a session.
pub fn issue_cookie(
    username: &str,
    user_id: DbId,
    config: &SessionConfig,
) -> Result<Cookie<'static>, jsonwebtoken::errors::Error> {
    let token = encode_session(username, user_id, config)?;
    Ok(Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::seconds(config.max_age_secs))
        .build())
}

/// Build a removal cookie that makes the browser drop the session.
pub fn clear_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build();
    cookie.make_removal();
    cookie
}

/// Resolve the identity carried by the request's `Cookie` headers.
///
/// Missing, malformed, tampered and expired tokens all resolve to
/// [`Identity::Anonymous`].
pub fn identity_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Identity {
    let token = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let Some(token) = token else {
        return Identity::Anonymous;
    };

    match decode_session(&token, config) {
        Ok(claims) => Identity::Authenticated {
            username: claims.username,
            user_id: claims.sub,
        },
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            Identity::Anonymous
        }
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(identity_from_headers(&parts.headers, &state.config.session))
    }
}
