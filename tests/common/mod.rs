//! Shared fixtures for integration tests.
//!
//! `start_backend()` stands up a wiremock server answering the three
//! GreenLens endpoints with the same shapes the real backend produces.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use greenlens::api::ApiClient;
use greenlens::app::App;
use image::{ImageBuffer, ImageFormat, Rgb};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A real PNG so preview dimensions and MIME detection are exercised.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encode png fixture");
    out.into_inner()
}

/// Write a PNG into `dir` and return its path.
pub fn write_png(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, png_bytes(8, 6)).expect("write png fixture");
    path
}

pub fn user_json(points: u64, co2: f64, history: Value) -> Value {
    json!({"name": "You", "ecoPoints": points, "co2Saved": co2, "history": history})
}

pub fn plastic_record(timestamp: i64) -> Value {
    json!({"type": "plastic", "info": "Rinse and dry before recycling.", "co2": 5, "points": 20, "timestamp": timestamp})
}

pub fn leaderboard_json(you: i64) -> Value {
    json!([{"name": "Ada", "points": 120}, {"name": "You", "points": you}])
}

pub fn classification_json() -> Value {
    json!({"type": "plastic", "info": "Rinse and dry before recycling.", "co2": 5, "points": 20})
}

/// Backend with a fresh user, a two-row leaderboard and a plastic classifier.
pub async fn start_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(0, 0.0, json!([]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leaderboard_json(0)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(classification_json()))
        .mount(&server)
        .await;
    server
}

pub fn app_for(server: &MockServer) -> App {
    App::new(ApiClient::new(server.uri()))
}

/// Apply `count` background completions, failing the test if one stalls.
pub async fn pump(app: &mut App, count: usize) {
    for _ in 0..count {
        let handled = tokio::time::timeout(Duration::from_secs(5), app.handle_next_message())
            .await
            .expect("background task reported in time");
        assert!(handled, "message channel closed");
    }
}
