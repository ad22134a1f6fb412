//! Common test utilities and helpers
//!
//! Shared by the integration suites:
//! - Mock movie API server (wiremock)
//! - Movie and page JSON fixtures
//! - Signed test tokens

#![allow(dead_code)]

use std::time::Duration;

use jsonwebtoken::{encode, EncodingKey, Header};
use movie_catalog::egui_app::{ApiClient, Config, TokenStore};
use movie_catalog::shared::AppConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Debounce window used by the suites; short enough to keep tests quick
pub const TEST_DEBOUNCE_MS: u64 = 50;

/// Upper bound for any single awaited event
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn config_for(server: &MockServer) -> Config {
    let builder = AppConfig::builder()
        .server_url(server.uri())
        .debounce_ms(TEST_DEBOUNCE_MS)
        .request_timeout_secs(5);
    Config::with_builder(builder).expect("valid test config")
}

pub fn api_for(server: &MockServer, tokens: TokenStore) -> ApiClient {
    ApiClient::new(&config_for(server), tokens).expect("client builds")
}

pub fn movie_json(id: &str, title: &str, year: i32, rating: f64) -> Value {
    json!({
        "_id": id,
        "title": title,
        "bannerImage": format!("https://img.example.com/{id}.jpg"),
        "description": format!("{title} description"),
        "year": year,
        "rating": rating,
        "runTime": 120
    })
}

pub fn page_json(movies: Vec<Value>, total_pages: u32) -> Value {
    let total_movies = movies.len();
    json!({
        "movies": movies,
        "pagination": {
            "totalPages": total_pages,
            "totalMovies": total_movies
        }
    })
}

/// HS256 token carrying `role`; the client never checks the signature
pub fn token_with_role(role: &str) -> String {
    let claims = json!({
        "email": "someone@example.com",
        "role": role,
        "exp": 4_102_444_800i64
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).expect("token encodes")
}

/// Await `future`, failing the test if it takes longer than [`EVENT_TIMEOUT`]
pub async fn within<F: std::future::Future>(future: F) -> F::Output {
    tokio::time::timeout(EVENT_TIMEOUT, future)
        .await
        .expect("timed out waiting for event")
}
