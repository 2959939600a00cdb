pub mod market;
pub mod query;
pub mod token;

use crate::config::Config;
use anyhow::{bail, Result};
use fcs_client::{ApiResponse, FcsClient};
use serde_json::Value;

/// Build a client from the loaded configuration
pub fn client(config: &Config) -> Result<FcsClient> {
  Ok(FcsClient::new(config.api_config.clone())?)
}

/// Print the payload of a successful response, or fail with the API message
pub fn print_response(response: &ApiResponse, config: &Config) -> Result<()> {
  if !response.is_success() {
    bail!(
      "API error (code {}): {}",
      response.code().unwrap_or_default(),
      response.error().unwrap_or_default()
    );
  }

  let data = response.response_data().cloned().unwrap_or(Value::Null);
  println!("{}", render(&data, config.compact_output)?);
  Ok(())
}

pub fn render(value: &Value, compact: bool) -> Result<String> {
  let text = if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
  Ok(text)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_render() {
    let value = json!({"s": "EUR/USD"});
    assert_eq!(render(&value, true).unwrap(), r#"{"s":"EUR/USD"}"#);
    assert!(render(&value, false).unwrap().contains('\n'));
  }
}
