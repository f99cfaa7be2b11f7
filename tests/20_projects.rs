mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn project_lifecycle_end_to_end() -> Result<()> {
    let server = common::spawn().await?;

    // Mutation without a session is forbidden
    let res = common::client()
        .post(server.url("/api/projects"))
        .json(&json!({ "title": "X" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Login as admin, create
    let admin = common::admin_client(&server).await?;
    let res = admin
        .post(server.url("/api/projects"))
        .json(&json!({
            "title": "X",
            "description": "Y",
            "category": "Web Design",
            "client": "Z",
            "imageUrl": "http://x",
            "featured": false
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "X");
    assert!(created["createdAt"].is_string());

    // Read it back, publicly
    let res = common::client()
        .get(server.url("/api/projects/1"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["title"], "X");
    assert_eq!(fetched["description"], "Y");
    assert_eq!(fetched["category"], "Web Design");
    assert_eq!(fetched["client"], "Z");
    assert_eq!(fetched["imageUrl"], "http://x");
    assert_eq!(fetched["featured"], false);

    // Delete, then the id is gone
    let res = admin
        .delete(server.url("/api/projects/1"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = common::client()
        .get(server.url("/api/projects/1"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // A second delete reports the absence, it does not blow up
    let res = admin
        .delete(server.url("/api/projects/1"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn partial_update_leaves_omitted_fields_alone() -> Result<()> {
    let server = common::spawn().await?;
    let admin = common::admin_client(&server).await?;

    let res = admin
        .post(server.url("/api/projects"))
        .json(&json!({
            "title": "Original title",
            "description": "Original description",
            "category": "Web Design",
            "client": "Acme",
            "imageUrl": "https://example.com/a.png",
            "featured": true
        }))
        .send()
        .await?;
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap();

    let res = admin
        .put(server.url(&format!("/api/projects/{id}")))
        .json(&json!({ "title": "New title" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;

    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["description"], "Original description");
    assert_eq!(updated["featured"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_project_is_not_found() -> Result<()> {
    let server = common::spawn().await?;
    let admin = common::admin_client(&server).await?;

    let res = admin
        .put(server.url("/api/projects/999"))
        .json(&json!({ "title": "anything" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_reports_every_invalid_field_at_once() -> Result<()> {
    let server = common::spawn().await?;
    let admin = common::admin_client(&server).await?;

    let res = admin
        .post(server.url("/api/projects"))
        .json(&json!({ "title": "Only a title", "imageUrl": "not a url" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    for field in ["description", "category", "client", "imageUrl"] {
        assert!(
            body["field_errors"][field].is_string(),
            "expected field error for {field}: {body}"
        );
    }
    // Nothing was persisted
    let listed: Value = common::client()
        .get(server.url("/api/projects"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn featured_and_category_filters_match_exactly() -> Result<()> {
    let server = common::spawn().await?;
    let admin = common::admin_client(&server).await?;

    for (title, category, featured) in [
        ("A", "Web Design", true),
        ("B", "Mobile Apps", false),
        ("C", "Web Design", false),
    ] {
        let res = admin
            .post(server.url("/api/projects"))
            .json(&json!({
                "title": title,
                "description": "d",
                "category": category,
                "client": "c",
                "imageUrl": "https://example.com/p.png",
                "featured": featured
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let featured: Value = common::client()
        .get(server.url("/api/projects/featured"))
        .send()
        .await?
        .json()
        .await?;
    let featured = featured.as_array().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["title"], "A");

    let web: Value = common::client()
        .get(server.url("/api/projects/category/Web%20Design"))
        .send()
        .await?
        .json()
        .await?;
    let titles: Vec<&str> = web
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A", "C"]);
    Ok(())
}
