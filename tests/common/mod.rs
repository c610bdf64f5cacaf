#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use creatorhub::{build_app, config::AppConfig, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    _dir: TempDir,
}

pub async fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.database_path = dir.path().join("app.db");
    config.session.secret = "integration-secret".into();

    let state = AppState::init(config).await.unwrap();
    TestApp {
        app: build_app(state.clone()),
        state,
        _dir: dir,
    }
}

fn encode(raw: &str) -> String {
    let mut out = String::new();
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method("GET").uri(uri);
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.app
            .clone()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.app
            .clone()
            .oneshot(req.body(Body::from(form_body(fields))).unwrap())
            .await
            .unwrap()
    }

    /// POST with a raw body and no `Content-Type` header.
    pub async fn post_raw(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method("POST").uri(uri);
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.app
            .clone()
            .oneshot(req.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn execute(&self, sql: &str) {
        sqlx::query(sql).execute(&self.state.db).await.unwrap();
    }

    /// Registers a user and returns the `session=...` cookie pair.
    pub async fn register(&self, name: &str, email: &str, pin: &str, role: &str) -> String {
        let res = self
            .post_form(
                "/register",
                &[("name", name), ("email", email), ("pin", pin), ("role", role)],
                None,
            )
            .await;
        session_cookie(&res).expect("registration sets a session cookie")
    }
}

/// The `session=<value>` pair from a Set-Cookie header, if present.
pub fn session_cookie(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn set_cookie_header(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn location(res: &Response<Body>) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
