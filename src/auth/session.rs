use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::{
    auth::repo_types::User,
    config::{SessionConfig, MAX_SESSION_TTL_MINUTES},
    error::AppError,
    state::AppState,
};

pub const SESSION_COOKIE: &str = "session";

/// Identity carried by the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub name: String,
    pub email: String,
    pub role: String,
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
    pub iss: String,
}

/// Signing and verification keys for session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub ttl: Duration,
    pub cookie_secure: bool,
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from_config(&state.config.session)
    }
}

impl SessionKeys {
    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            ttl: Duration::minutes(
                cfg.ttl_minutes
                    .clamp(-MAX_SESSION_TTL_MINUTES, MAX_SESSION_TTL_MINUTES),
            ),
            cookie_secure: cfg.cookie_secure,
        }
    }

    pub fn sign(&self, user: &User) -> Result<String, AppError> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = SessionClaims {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            iat: now.unix_timestamp().max(0) as usize,
            exp: exp.unix_timestamp().max(0) as usize,
            iss: self.issuer.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(email = %user.email, "session signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::default();
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<SessionClaims>(token, &self.decoding, &validation)?;
        debug!(email = %data.claims.email, "session verified");
        Ok(data.claims)
    }

    /// Browser-session cookie: no `Expires`, the token carries its own expiry.
    pub fn cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.cookie_secure)
            .http_only(true)
            .build()
    }

    /// Signs a session for `user` and adds its cookie to `jar`.
    pub fn start(&self, jar: CookieJar, user: &User) -> Result<CookieJar, AppError> {
        let token = self.sign(user)?;
        Ok(jar.add(self.cookie(token)))
    }
}

/// Drops the session cookie from the browser.
pub fn end(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
