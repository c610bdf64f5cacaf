//! Profile view and upsert through the full router.

mod common;

use axum::http::StatusCode;
use common::{body_text, location, set_cookie_header, setup_app};
use creatorhub::profiles::repo_types::{Profile, ProfileFields};

#[tokio::test]
async fn empty_profile_renders_with_role() {
    let t = setup_app().await;
    let cookie = t.register("Dana", "dana@x.com", "1111", "Content Creator").await;

    let res = t.get("/profile", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Role: Content Creator"));
    assert!(body.contains("not filled in"));
    assert!(Profile::find_by_email(&t.state.db, "dana@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn resubmitting_profile_overwrites_single_row() {
    let t = setup_app().await;
    let cookie = t.register("Alice", "alice@x.com", "9999", "Editor").await;

    let res = t
        .post_form(
            "/profile",
            &[
                ("bio", "hi"),
                ("skills", "video"),
                ("experience", "2y"),
                ("rate", "50"),
                ("budget", "100-200"),
                ("niche", "tech"),
            ],
            Some(&cookie),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("name=\"niche\" value=\"tech\""));
    assert!(body.contains("name=\"budget\" value=\"100-200\""));

    let res = t
        .post_form("/profile", &[("bio", "updated")], Some(&cookie))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains(">updated</textarea>"));
    assert!(body.contains("name=\"niche\" value=\"\""));

    assert_eq!(Profile::count_for(&t.state.db, "alice@x.com").await.unwrap(), 1);
    let stored = Profile::find_by_email(&t.state.db, "alice@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.fields,
        ProfileFields {
            bio: "updated".into(),
            ..Default::default()
        }
    );

    let body = body_text(t.get("/profile", Some(&cookie)).await).await;
    assert!(body.contains(">updated</textarea>"));
}

#[tokio::test]
async fn profile_values_are_html_escaped() {
    let t = setup_app().await;
    let cookie = t.register("Eve", "eve@x.com", "2222", "Editor").await;

    let body = body_text(
        t.post_form(
            "/profile",
            &[("bio", "<script>alert(1)</script>")],
            Some(&cookie),
        )
        .await,
    )
    .await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn saving_profile_for_deleted_user_ends_session() {
    let t = setup_app().await;
    let cookie = t.register("Ann", "a@x.com", "3333", "Editor").await;
    t.execute("DELETE FROM users WHERE email = 'a@x.com'").await;

    let res = t
        .post_form("/profile", &[("bio", "still here?")], Some(&cookie))
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/login"));
    let removal = set_cookie_header(&res).expect("removal cookie");
    assert!(removal.starts_with("session=;"));
    assert!(removal.contains("Max-Age=0"));

    assert_eq!(Profile::count_for(&t.state.db, "a@x.com").await.unwrap(), 0);
}
