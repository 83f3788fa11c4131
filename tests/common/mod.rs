//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application whose email provider
//! is a local mock server.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

use influencer_campaign_api::infrastructure::driven_adapters::config::AppConfig;
use influencer_campaign_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use influencer_campaign_api::infrastructure::driving_adapters::api_rest::{router, AppState};

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

pub const TEST_USER_ID: &str = "test-user-id";
pub const OTHER_USER_ID: &str = "other-user-id";

/// JWT claims for test tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct TestClaims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub jwt_token: String,
    pub email_server: MockServer,
    pub upload_dir: PathBuf,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
        let email_server = MockServer::start().await;
        let upload_dir = std::env::temp_dir().join(format!("influencer-campaign-api-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&upload_dir).expect("Failed to create upload directory");

        let config = create_test_config(&database_url, &email_server.uri(), &upload_dir);

        let pool = create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let app_state = AppState::build(config, pool.clone()).expect("Failed to build application state");

        // Router without rate limiting: oneshot requests carry no peer address
        let router = router(app_state);

        Self {
            router,
            pool,
            jwt_token: generate_token_for(TEST_USER_ID),
            email_server,
            upload_dir,
            _container: container,
        }
    }

    /// Get the authorization header value for requests
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Send a JSON request, authenticated as the test user unless `token` is given
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request_as(&self.auth_header(), method, uri, body).await
    }

    pub async fn request_as(
        &self,
        authorization: &str,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if !authorization.is_empty() {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Send a request without an Authorization header
    pub async fn public_request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request_as("", method, uri, body).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, json)
    }

    /// Clear all data from the database (useful between tests)
    pub async fn clear_database(&self) {
        sqlx::query(
            "TRUNCATE TABLE survey_responses, email_survey_connections, emails_sent, emails_received, \
             instagram_accounts, influencers, influencer_fields, email_templates, survey_templates, \
             campaign_blocks CASCADE",
        )
        .execute(&self.pool)
        .await
        .expect("Failed to truncate tables");
    }

    /// Insert a sent email directly, for flows that start from an existing send
    pub async fn insert_sent_email(&self, user_id: &str, to_address: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO emails_sent (id, user_id, to_address, subject, body, status) \
             VALUES ($1, $2, $3, 'Hello', 'Body', 'sent')",
        )
        .bind(id)
        .bind(user_id)
        .bind(to_address)
        .execute(&self.pool)
        .await
        .expect("Failed to insert sent email");
        id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

/// Create a test configuration
fn create_test_config(database_url: &str, email_api: &str, upload_dir: &std::path::Path) -> AppConfig {
    // AppConfig holds SecretStrings, which are only built through deserialization
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0
allowed_origins = []

[database]
url = "{database_url}"
max_connections = 5
min_connections = 1

[jwt]
secret = "{TEST_JWT_SECRET}"
leeway_secs = 60

[rate_limit]
per_second = 1000
burst_size = 1000

[instagram]
app_id = "test-app"
app_secret = "test-app-secret"
redirect_uri = "http://localhost:8080/instagram/callback"
scopes = ["instagram_basic", "pages_show_list"]
dialog_base_url = "https://www.facebook.com"
graph_base_url = "http://127.0.0.1:9"
api_version = "v19.0"
frontend_redirect_url = "http://localhost:3000/settings/integrations"
state_ttl_secs = 600

[email]
api_url = "{email_api}/emails"
api_key = "test-email-key"
from_address = "outreach@example.com"
from_name = "Campaign Team"
timeout_secs = 5

[uploads]
directory = "{upload_dir}"
public_base_url = "http://localhost:8080/uploads"
max_image_bytes = 1024
max_file_bytes = 4096

[app]
public_base_url = "http://localhost:3000"
"#,
        upload_dir = upload_dir.display()
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Generate a valid JWT token for the given user
pub fn generate_token_for(user_id: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = TestClaims {
        sub: user_id.to_string(),
        email: format!("{user_id}@example.com"),
        iat: now,
        exp: now + 3600, // 1 hour from now
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to generate test JWT token")
}

/// Generate an expired JWT token for testing unauthorized scenarios
pub fn generate_expired_token() -> String {
    let now = Utc::now().timestamp();
    let claims = TestClaims {
        sub: TEST_USER_ID.to_string(),
        email: "test@example.com".to_string(),
        iat: now - 7200, // 2 hours ago
        exp: now - 3600, // 1 hour ago (expired)
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to generate expired JWT token")
}

/// Error response structure for deserializing error responses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
