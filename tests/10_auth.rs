mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_creates_account_and_logs_in() -> Result<()> {
    let server = common::spawn().await?;
    let client = common::client();

    let res = client
        .post(server.url("/api/register"))
        .json(&json!({ "username": "newcomer", "password": "longenough" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await?;
    assert_eq!(body["username"], "newcomer");
    assert_eq!(body["isAdmin"], false);
    // The credential never appears in a response
    assert!(body.get("password").is_none());

    // Registration established a session (auto-login)
    let res = client.get(server.url("/api/user")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = res.json().await?;
    assert_eq!(me["username"], "newcomer");
    Ok(())
}

#[tokio::test]
async fn register_ignores_is_admin_in_the_payload() -> Result<()> {
    let server = common::spawn().await?;
    let client = common::client();

    let res = client
        .post(server.url("/api/register"))
        .json(&json!({
            "username": "wannabe",
            "password": "longenough",
            "isAdmin": true
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["isAdmin"], false);

    // And the gate agrees: no admin access for the tampered registration
    let res = client.get(server.url("/api/applications")).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_conflicts() -> Result<()> {
    let server = common::spawn().await?;
    common::user_client(&server, "taken").await?;

    let res = common::client()
        .post(server.url("/api/register"))
        .json(&json!({ "username": "taken", "password": "longenough" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn register_validates_credentials() -> Result<()> {
    let server = common::spawn().await?;

    let res = common::client()
        .post(server.url("/api/register"))
        .json(&json!({ "username": "ok", "password": "short" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["username"].is_string());
    assert!(body["field_errors"]["password"].is_string());
    Ok(())
}

#[tokio::test]
async fn login_failure_is_uniform_for_unknown_user_and_wrong_password() -> Result<()> {
    let server = common::spawn().await?;
    let client = common::client();

    let unknown = client
        .post(server.url("/api/login"))
        .json(&json!({ "username": "ghost", "password": "whatever123" }))
        .send()
        .await?;
    let unknown_status = unknown.status();
    let unknown_body: Value = unknown.json().await?;

    let wrong = client
        .post(server.url("/api/login"))
        .json(&json!({ "username": common::ADMIN_USERNAME, "password": "wrongpass" }))
        .send()
        .await?;
    let wrong_status = wrong.status();
    let wrong_body: Value = wrong.json().await?;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    // Identical bodies: the response must not reveal which branch failed
    assert_eq!(unknown_body, wrong_body);
    Ok(())
}

#[tokio::test]
async fn logout_destroys_the_session_and_is_idempotent() -> Result<()> {
    let server = common::spawn().await?;
    let client = common::admin_client(&server).await?;

    assert_eq!(
        client.get(server.url("/api/user")).send().await?.status(),
        StatusCode::OK
    );

    let res = client.post(server.url("/api/logout")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Session is gone
    assert_eq!(
        client.get(server.url("/api/user")).send().await?.status(),
        StatusCode::UNAUTHORIZED
    );

    // Logging out again, with no live session, is still not an error
    let res = client.post(server.url("/api/logout")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn current_user_requires_a_session() -> Result<()> {
    let server = common::spawn().await?;
    let res = common::client().get(server.url("/api/user")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn admin_deny_shape_is_identical_for_anonymous_and_non_admin() -> Result<()> {
    let server = common::spawn().await?;

    let anonymous = common::client()
        .post(server.url("/api/projects"))
        .json(&json!({ "title": "X" }))
        .send()
        .await?;
    let anonymous_status = anonymous.status();
    let anonymous_body: Value = anonymous.json().await?;

    let member = common::user_client(&server, "plain-member").await?;
    let forbidden = member
        .post(server.url("/api/projects"))
        .json(&json!({ "title": "X" }))
        .send()
        .await?;
    let forbidden_status = forbidden.status();
    let forbidden_body: Value = forbidden.json().await?;

    assert_eq!(anonymous_status, StatusCode::FORBIDDEN);
    assert_eq!(anonymous_status, forbidden_status);
    assert_eq!(anonymous_body, forbidden_body);
    Ok(())
}
