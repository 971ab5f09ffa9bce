#![allow(dead_code)]

use serde_json::json;
use std::path::Path;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLOUD_NAME: &str = "demo";
pub const UPLOAD_PATH: &str = "/v1_1/demo/auto/upload";

/// A connection string pointing the client at the mock server.
pub fn connection_string(server: &MockServer, api_key: &str) -> String {
    format!(
        "cloudinary://{api_key}:test_secret@{CLOUD_NAME}?upload_prefix={}",
        server.uri()
    )
}

pub fn secure_url_for(file_name: &str) -> String {
    format!("https://res.cloudinary.com/{CLOUD_NAME}/image/upload/v1/{file_name}")
}

/// Answers uploads of `file_name` with a successful response.
pub async fn mount_upload_success(server: &MockServer, file_name: &str) {
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains(format!("filename=\"{file_name}\"")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_id": file_name,
            "resource_type": "image",
            "bytes": 5,
            "secure_url": secure_url_for(file_name)
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Answers uploads of `file_name` with a Cloudinary error envelope.
pub async fn mount_upload_failure(server: &MockServer, file_name: &str) {
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .and(body_string_contains(format!("filename=\"{file_name}\"")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Invalid image file" }
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub fn write_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"dummy").unwrap();
    }
}

pub fn lines(buf: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
