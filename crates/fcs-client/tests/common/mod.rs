//! Common test utilities for fcs-client tests

use fcs_client::{Config, FcsClient};
use std::collections::HashMap;
use wiremock::{MockServer, Request};

#[allow(dead_code)]
pub const ACCESS_KEY: &str = "SECRET";
#[allow(dead_code)]
pub const PUBLIC_KEY: &str = "PUB";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
  MockServer::start().await
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer, config: Config) -> FcsClient {
  FcsClient::new(config.with_base_url(server.uri())).expect("client should build")
}

#[allow(dead_code)]
pub fn access_key_client(server: &MockServer) -> FcsClient {
  client_for(server, Config::with_access_key(ACCESS_KEY.to_string()))
}

/// Decode the form body of a captured request
#[allow(dead_code)]
pub fn form_fields(request: &Request) -> HashMap<String, String> {
  url::form_urlencoded::parse(&request.body).into_owned().collect()
}

/// Form bodies of every request the server has seen, in order
#[allow(dead_code)]
pub async fn received_forms(server: &MockServer) -> Vec<HashMap<String, String>> {
  server
    .received_requests()
    .await
    .expect("request recording is enabled")
    .iter()
    .map(form_fields)
    .collect()
}

/// Envelope of a successful call
#[allow(dead_code)]
pub fn ok_body(response: serde_json::Value) -> serde_json::Value {
  serde_json::json!({
    "status": true,
    "code": 200,
    "msg": "Successfully",
    "response": response,
    "info": {"server_time": "2024-01-15 16:00:00", "credit_count": 1}
  })
}
