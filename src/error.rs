use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("Email already registered!")]
    EmailTaken,
    /// Same message for an unknown email and a wrong PIN.
    #[error("Invalid email or PIN")]
    InvalidCredentials,
    /// The session names an email with no `users` row.
    #[error("session user no longer exists")]
    UnknownUser,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::UnknownUser => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message to show inline on a form. Internal failures get `fallback`
    /// so nothing about the database leaks to the page.
    pub fn form_message<'a>(&'a self, fallback: &'a str) -> std::borrow::Cow<'a, str> {
        if self.is_internal() {
            fallback.into()
        } else {
            self.to_string().into()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            error!(error = ?self, "request failed");
            return (status, Html(views::internal_error())).into_response();
        }
        (status, self.to_string()).into_response()
    }
}
