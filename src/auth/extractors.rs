use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use super::session::{SessionKeys, SESSION_COOKIE};

/// Authenticated identity for the current request, read from the signed
/// session cookie. Rejects with a redirect to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            debug!("no session cookie");
            return Err(Redirect::to("/login"));
        };

        let keys = SessionKeys::from_ref(state);
        match keys.verify(cookie.value()) {
            Ok(claims) => Ok(CurrentUser {
                name: claims.name,
                email: claims.email,
                role: claims.role,
            }),
            Err(e) => {
                warn!(error = %e, "invalid or expired session");
                Err(Redirect::to("/login"))
            }
        }
    }
}
