/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The JSON envelope every FCS API endpoint returns

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message reported when a failed response carries no `msg`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A parsed API response.
///
/// Kept as a string-keyed JSON object rather than a fixed struct: the
/// envelope fields (`status`, `code`, `msg`, `response`, `info`) are read
/// through accessors and anything else the server adds is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
  /// Wrap an already parsed JSON object
  pub fn new(fields: Map<String, Value>) -> Self {
    Self(fields)
  }

  /// Parse a response body; anything other than a JSON object is an error
  pub fn from_json(body: &str) -> serde_json::Result<Self> {
    serde_json::from_str(body)
  }

  /// Synthetic failure recorded when no usable response was received
  pub fn request_error(msg: impl Into<String>) -> Self {
    let mut fields = Map::new();
    fields.insert("status".to_string(), Value::Bool(false));
    fields.insert("code".to_string(), Value::from(0));
    fields.insert("msg".to_string(), Value::String(msg.into()));
    fields.insert("response".to_string(), Value::Null);
    Self(fields)
  }

  /// True iff `status` is the boolean `true`
  pub fn is_success(&self) -> bool {
    matches!(self.0.get("status"), Some(Value::Bool(true)))
  }

  pub fn status(&self) -> Option<bool> {
    self.0.get("status").and_then(Value::as_bool)
  }

  pub fn code(&self) -> Option<i64> {
    self.0.get("code").and_then(Value::as_i64)
  }

  pub fn msg(&self) -> Option<&str> {
    self.0.get("msg").and_then(Value::as_str)
  }

  /// `None` on success, otherwise the server message or [`UNKNOWN_ERROR`]
  pub fn error(&self) -> Option<&str> {
    if self.is_success() {
      None
    } else {
      Some(self.msg().unwrap_or(UNKNOWN_ERROR))
    }
  }

  /// The `response` payload; `None` when absent or null
  pub fn response_data(&self) -> Option<&Value> {
    self.0.get("response").filter(|v| !v.is_null())
  }

  /// Deserialize the `response` payload into a caller-chosen type
  pub fn data_as<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
    self.response_data().map(|v| T::deserialize(v)).transpose()
  }

  /// The `info` block (server time, credit usage) if the server sent one
  pub fn info(&self) -> Option<ResponseInfo> {
    self.0.get("info").and_then(|v| ResponseInfo::deserialize(v).ok())
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.0
  }

  pub fn into_map(self) -> Map<String, Value> {
    self.0
  }

  pub fn into_value(self) -> Value {
    Value::Object(self.0)
  }
}

impl From<Map<String, Value>> for ApiResponse {
  fn from(fields: Map<String, Value>) -> Self {
    Self(fields)
  }
}

/// Metadata the server attaches next to the payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
  /// Server clock, `YYYY-MM-DD HH:MM:SS` UTC
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub server_time: Option<String>,

  /// Credits consumed by this request
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credit_count: Option<i64>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ResponseInfo {
  pub fn server_time_utc(&self) -> Option<NaiveDateTime> {
    self
      .server_time
      .as_deref()
      .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S").ok())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_success_response() {
    let body = r#"{
      "status": true,
      "code": 200,
      "msg": "Successfully",
      "response": [{"id": "1", "s": "EUR/USD", "c": "1.0850"}],
      "info": {"server_time": "2024-01-15 16:00:00", "credit_count": 1}
    }"#;
    let response = ApiResponse::from_json(body).unwrap();

    assert!(response.is_success());
    assert_eq!(response.code(), Some(200));
    assert_eq!(response.error(), None);
    assert_eq!(response.response_data().unwrap()[0]["s"], "EUR/USD");

    let info = response.info().unwrap();
    assert_eq!(info.credit_count, Some(1));
    assert_eq!(
      info.server_time_utc().unwrap().format("%H:%M").to_string(),
      "16:00"
    );
  }

  #[test]
  fn test_application_error_passes_through() {
    let response =
      ApiResponse::from_json(r#"{"status": false, "code": 101, "msg": "Invalid symbol"}"#).unwrap();

    assert!(!response.is_success());
    assert_eq!(response.status(), Some(false));
    assert_eq!(response.error(), Some("Invalid symbol"));
    assert!(response.response_data().is_none());
  }

  #[test]
  fn test_status_must_be_boolean_true() {
    let response = ApiResponse::from_json(r#"{"status": "true", "response": {}}"#).unwrap();
    assert!(!response.is_success());
    assert_eq!(response.error(), Some(UNKNOWN_ERROR));

    let response = ApiResponse::from_json(r#"{"status": 1}"#).unwrap();
    assert!(!response.is_success());
  }

  #[test]
  fn test_request_error_shape() {
    let response = ApiResponse::request_error("Request Error: connection refused");

    assert_eq!(
      response.clone().into_value(),
      json!({"status": false, "code": 0, "msg": "Request Error: connection refused", "response": null})
    );
    assert_eq!(response.error(), Some("Request Error: connection refused"));
    assert!(response.response_data().is_none());
  }

  #[test]
  fn test_non_object_body_is_rejected() {
    assert!(ApiResponse::from_json("[1, 2, 3]").is_err());
    assert!(ApiResponse::from_json("<html>502 Bad Gateway</html>").is_err());
  }

  #[test]
  fn test_data_as() {
    #[derive(Deserialize)]
    struct Quote {
      s: String,
      c: String,
    }

    let response = ApiResponse::from_json(
      r#"{"status": true, "response": [{"s": "BTC/USDT", "c": "43000.5"}]}"#,
    )
    .unwrap();
    let quotes: Vec<Quote> = response.data_as().unwrap().unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].s, "BTC/USDT");
    assert_eq!(quotes[0].c, "43000.5");
  }
}
