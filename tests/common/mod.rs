use anyhow::{Context, Result};
use serde_json::json;

use pixelperfect_api::app::app;
use pixelperfect_api::auth::session::SessionStore;
use pixelperfect_api::state::AppState;
use pixelperfect_api::store::{seed, Store};

pub const ADMIN_USERNAME: &str = "admin@pixelperfect.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn a fresh in-process server on an ephemeral port. Each test gets its
/// own store, so suites never observe each other's records. Only the admin
/// account is seeded; tests create whatever content they need.
pub async fn spawn() -> Result<TestServer> {
    let store = Store::new();
    seed::seed_admin(&store, ADMIN_USERNAME, ADMIN_PASSWORD)?;

    let state = AppState::new(store, SessionStore::new(24));
    let router = app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}

/// Cookie-keeping client, anonymous until it logs in.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

/// Client holding an admin session.
pub async fn admin_client(server: &TestServer) -> Result<reqwest::Client> {
    let client = client();
    let res = client
        .post(server.url("/api/login"))
        .json(&json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == 200, "admin login failed: {}", res.status());
    Ok(client)
}

/// Client holding a session for a freshly registered non-admin user.
pub async fn user_client(server: &TestServer, username: &str) -> Result<reqwest::Client> {
    let client = client();
    let res = client
        .post(server.url("/api/register"))
        .json(&json!({ "username": username, "password": "notadmin1" }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == 201, "registration failed: {}", res.status());
    Ok(client)
}
