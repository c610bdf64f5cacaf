use axum::{
    extract::{rejection::FormRejection, FromRef, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterForm},
        extractors::CurrentUser,
        repo_types::User,
        session::{self, SessionKeys},
    },
    error::AppError,
    state::AppState,
    views,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/home", get(home))
}

pub async fn index() -> Html<String> {
    Html(views::index())
}

pub async fn register_form() -> Html<String> {
    Html(views::register_page(None))
}

pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// Inserts the user after presence and uniqueness checks.
pub async fn register_user(state: &AppState, form: &RegisterForm) -> Result<User, AppError> {
    let form = form.normalized().ok_or(AppError::MissingFields)?;

    if User::find_by_email(&state.db, &form.email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    User::create(&state.db, &form.name, &form.email, &form.pin, &form.role).await
}

/// Looks up the user matching both email and PIN exactly.
pub async fn authenticate(state: &AppState, form: &LoginForm) -> Result<User, AppError> {
    User::find_by_credentials(&state.db, form.email.trim(), form.pin.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)
}

/// A body that is not a urlencoded form counts as a form with every field
/// empty, so the page re-renders with the usual message.
fn form_or_empty<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable form body; treating fields as empty");
            T::default()
        }
    }
}

#[instrument(skip(state, jar, form))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Response {
    let form = form_or_empty(form);
    let started = register_user(&state, &form).await.and_then(|user| {
        let jar = SessionKeys::from_ref(&state).start(jar, &user)?;
        Ok((jar, user))
    });

    match started {
        Ok((jar, user)) => {
            info!(user_id = user.id, email = %user.email, "user registered");
            (jar, Redirect::to("/home")).into_response()
        }
        Err(e) => {
            if e.is_internal() {
                error!(error = ?e, "registration failed");
            } else {
                warn!(email = %form.email.trim(), reason = %e, "registration rejected");
            }
            let message = e.form_message("Registration failed. Please try again.");
            (e.status_code(), Html(views::register_page(Some(&*message)))).into_response()
        }
    }
}

#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let form = form_or_empty(form);
    let started = authenticate(&state, &form).await.and_then(|user| {
        let jar = SessionKeys::from_ref(&state).start(jar, &user)?;
        Ok((jar, user))
    });

    match started {
        Ok((jar, user)) => {
            info!(user_id = user.id, email = %user.email, "user logged in");
            (jar, Redirect::to("/home")).into_response()
        }
        Err(e) => {
            if e.is_internal() {
                error!(error = ?e, "login failed");
            } else {
                warn!(email = %form.email.trim(), "login invalid credentials");
            }
            let message = e.form_message("Login failed. Please try again.");
            (e.status_code(), Html(views::login_page(Some(&*message)))).into_response()
        }
    }
}

#[instrument(skip_all, fields(email = %user.email))]
pub async fn home(user: CurrentUser) -> Html<String> {
    Html(views::home_page(&user.name, &user.email, &user.role))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    info!("user logged out");
    (session::end(jar), Redirect::to("/login"))
}
