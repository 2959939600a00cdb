use thiserror::Error;

/// The main error type for fcs-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// The access key is missing but the selected auth method needs it
  #[error("Access key error: {0}")]
  AccessKey(String),

  /// Base URL or endpoint path could not be turned into a URL
  #[error("Invalid URL: {0}")]
  InvalidUrl(String),

  /// HTTP client construction error
  #[error("HTTP error: {0}")]
  Http(String),

  /// A request that never produced a usable API envelope.
  ///
  /// `msg` is the same text recorded in the synthetic last response.
  #[error("{msg}")]
  Request { code: i64, msg: String },

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// True for errors caused by local configuration rather than the network
  pub fn is_config(&self) -> bool {
    matches!(self, Error::Config(_) | Error::AccessKey(_))
  }

  /// Build the synthetic request failure used by the dispatcher
  pub fn request(details: impl std::fmt::Display) -> Self {
    Error::Request { code: 0, msg: format!("Request Error: {}", details) }
  }
}

/// Result type alias for fcs-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_error_message() {
    let err = Error::request("connection refused");
    assert_eq!(err.to_string(), "Request Error: connection refused");
    assert!(!err.is_config());

    if let Error::Request { code, .. } = err {
      assert_eq!(code, 0);
    } else {
      panic!("Expected Request error");
    }
  }

  #[test]
  fn test_config_errors_are_flagged() {
    assert!(Error::AccessKey("missing".to_string()).is_config());
    assert!(Error::Config("bad".to_string()).is_config());
    assert!(!Error::Parse("bad".to_string()).is_config());
    assert!(!Error::InvalidUrl("bad".to_string()).is_config());
  }
}
