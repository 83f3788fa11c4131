//! End-to-end tests for campaign block endpoints
//!
//! These tests spin up a real PostgreSQL database using testcontainers,
//! run migrations, and exercise the block CRUD and video parsing routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{generate_token_for, ErrorResponse, TestApp, OTHER_USER_ID};

// ============================================================================
// POST /campaign-blocks
// ============================================================================

#[tokio::test]
async fn test_create_block_success() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({
                "name": "Intro",
                "blockType": "text",
                "content": { "text": "Welcome to the campaign" },
                "position": 1
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Intro");
    assert_eq!(body["blockType"], "text");
    assert_eq!(body["content"]["text"], "Welcome to the campaign");
    assert!(body.get("embed").is_none());
}

#[tokio::test]
async fn test_create_video_block_includes_embed() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({
                "name": "Teaser",
                "blockType": "video",
                "content": { "url": "https://youtu.be/dQw4w9WgXcQ" }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["embed"]["provider"], "youtube");
    assert_eq!(body["embed"]["videoId"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_create_block_with_missing_content_key_returns_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({
                "name": "Call to action",
                "blockType": "button",
                "content": { "label": "Apply" }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_block_with_unknown_type_returns_bad_request() {
    let app = TestApp::new().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({ "name": "Odd", "blockType": "carousel", "content": {} })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// GET /campaign-blocks
// ============================================================================

#[tokio::test]
async fn test_list_blocks_ordered_by_position_and_scoped_to_owner() {
    let app = TestApp::new().await;

    for (name, position) in [("Second", 2), ("First", 1)] {
        let (status, _) = app
            .request(
                Method::POST,
                "/campaign-blocks",
                Some(json!({
                    "name": name,
                    "blockType": "text",
                    "content": { "text": name },
                    "position": position
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.request(Method::GET, "/campaign-blocks", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);

    let other = format!("Bearer {}", generate_token_for(OTHER_USER_ID));
    let (status, body) = app.request_as(&other, Method::GET, "/campaign-blocks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

// ============================================================================
// GET / PATCH / DELETE /campaign-blocks/:id
// ============================================================================

#[tokio::test]
async fn test_get_block_of_another_user_returns_not_found() {
    let app = TestApp::new().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({ "name": "Mine", "blockType": "text", "content": { "text": "hi" } })),
        )
        .await;
    let uri = format!("/campaign-blocks/{}", created["id"].as_str().unwrap());

    let other = format!("Bearer {}", generate_token_for(OTHER_USER_ID));
    let (status, _) = app.request_as(&other, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.request(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mine");
}

#[tokio::test]
async fn test_get_block_with_malformed_id_returns_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::GET, "/campaign-blocks/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error.code, "INVALID_UUID");
}

#[tokio::test]
async fn test_patch_block_revalidates_type_change() {
    let app = TestApp::new().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({ "name": "Body", "blockType": "text", "content": { "text": "hi" } })),
        )
        .await;
    let uri = format!("/campaign-blocks/{}", created["id"].as_str().unwrap());

    // Switching to an image without a url is rejected
    let (status, _) = app
        .request(Method::PATCH, &uri, Some(json!({ "blockType": "image" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .request(
            Method::PATCH,
            &uri,
            Some(json!({
                "blockType": "image",
                "content": { "url": "https://cdn.example.com/hero.png" }
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blockType"], "image");
    assert_eq!(body["name"], "Body");
}

#[tokio::test]
async fn test_delete_block() {
    let app = TestApp::new().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/campaign-blocks",
            Some(json!({ "name": "Temp", "blockType": "text", "content": { "text": "x" } })),
        )
        .await;
    let uri = format!("/campaign-blocks/{}", created["id"].as_str().unwrap());

    let (status, _) = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// POST /campaign-blocks/parse-video
// ============================================================================

#[tokio::test]
async fn test_parse_video_urls() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/campaign-blocks/parse-video",
            Some(json!({ "url": "https://vimeo.com/76979871" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "vimeo");
    assert_eq!(body["embedUrl"], "https://player.vimeo.com/video/76979871");

    let (status, _) = app
        .request(
            Method::POST,
            "/campaign-blocks/parse-video",
            Some(json!({ "url": "https://example.com/watch?v=1" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
