#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FEEDBACK_PATH: &str = "/api/feedback";
pub const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A mock feedback endpoint and the URL clients should post to.
pub struct Endpoint {
    pub server: MockServer,
    pub url: String,
}

impl Endpoint {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let url = format!("{}{FEEDBACK_PATH}", server.uri());
        Self { server, url }
    }

    pub async fn accept(&self, id: &str) {
        self.respond(ResponseTemplate::new(200).set_body_json(receipt(id)))
            .await;
    }

    pub async fn accept_after(&self, id: &str, delay: Duration) {
        self.respond(
            ResponseTemplate::new(200)
                .set_body_json(receipt(id))
                .set_delay(delay),
        )
        .await;
    }

    pub async fn reject(&self, status: u16, error: &str) {
        self.respond(ResponseTemplate::new(status).set_body_json(json!({ "error": error })))
            .await;
    }

    pub async fn respond(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(FEEDBACK_PATH))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request the endpoint has seen, in order.
    pub async fn bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}

pub fn receipt(id: &str) -> Value {
    json!({ "id": id, "status": "received" })
}

/// A PNG-signed buffer of exactly `len` bytes.
pub fn png_of_len(len: usize) -> Vec<u8> {
    let mut data = PNG_HEADER.to_vec();
    data.resize(len.max(PNG_HEADER.len()), 0);
    data
}
