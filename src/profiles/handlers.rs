use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument, warn};

use super::{dto::ProfileForm, repo_types::Profile};
use crate::{
    auth::{extractors::CurrentUser, session},
    error::AppError,
    state::AppState,
    views,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(show_profile).post(save_profile))
}

#[instrument(skip_all, fields(email = %user.email))]
pub async fn show_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, AppError> {
    let profile = Profile::find_by_email(&state.db, &user.email).await?;
    Ok(Html(views::profile_page(
        &user.role,
        profile.as_ref().map(|p| &p.fields),
    )))
}

/// Saves the submitted fields over any stored profile and renders the
/// stored result. A session whose user row is gone is ended.
#[instrument(skip_all, fields(email = %user.email))]
pub async fn save_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    jar: CookieJar,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    match Profile::upsert(&state.db, &user.email, &form.into()).await {
        Ok(saved) => {
            info!(profile_id = saved.id, "profile saved");
            Ok(Html(views::profile_page(&user.role, Some(&saved.fields))).into_response())
        }
        Err(AppError::UnknownUser) => {
            warn!("session user no longer exists; ending session");
            Ok((session::end(jar), Redirect::to("/login")).into_response())
        }
        Err(e) => Err(e),
    }
}
