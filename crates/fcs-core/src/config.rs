//! Configuration management for the FCS API client

use crate::auth::AuthMethod;
use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Main configuration struct for the FCS API client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// How requests are authenticated
  pub auth_method: AuthMethod,

  /// Secret access key; required by `access_key` and `token` auth
  pub access_key: Option<String>,

  /// Public key paired with the secret in `token` auth
  pub public_key: Option<String>,

  /// Lifetime of generated tokens in seconds
  pub token_expiry_secs: u64,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Connect timeout in seconds
  pub connect_timeout_secs: u64,

  /// Base URL for the API; endpoint paths are joined onto it
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let auth_method = match env::var("FCS_AUTH_METHOD") {
      Ok(value) => value.parse()?,
      Err(_) => AuthMethod::default(),
    };

    let access_key = env::var("FCS_ACCESS_KEY").ok().filter(|k| !k.is_empty());
    let public_key = env::var("FCS_PUBLIC_KEY").ok().filter(|k| !k.is_empty());

    let token_expiry_secs = env_or("FCS_TOKEN_EXPIRY", crate::DEFAULT_TOKEN_EXPIRY_SECS)?;
    let timeout_secs = env_or("FCS_TIMEOUT_SECS", crate::DEFAULT_TIMEOUT_SECS)?;
    let connect_timeout_secs =
      env_or("FCS_CONNECT_TIMEOUT_SECS", crate::DEFAULT_CONNECT_TIMEOUT_SECS)?;

    let base_url = env::var("FCS_BASE_URL").unwrap_or_else(|_| crate::FCS_BASE_URL.to_string());

    let config = Config {
      auth_method,
      access_key,
      public_key,
      token_expiry_secs,
      timeout_secs,
      connect_timeout_secs,
      base_url,
    };
    config.validate()?;

    Ok(config)
  }

  /// Config that sends the access key with every request
  pub fn with_access_key(access_key: String) -> Self {
    Config { auth_method: AuthMethod::AccessKey, access_key: Some(access_key), ..Self::base() }
  }

  /// Config that signs every request with a short-lived token
  pub fn with_token(access_key: String, public_key: String) -> Self {
    Config {
      auth_method: AuthMethod::Token,
      access_key: Some(access_key),
      public_key: Some(public_key),
      ..Self::base()
    }
  }

  /// Config for a server that authenticates by caller IP
  pub fn ip_whitelist() -> Self {
    Config { auth_method: AuthMethod::IpWhitelist, ..Self::base() }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_timeouts(mut self, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self.connect_timeout_secs = connect_timeout_secs;
    self
  }

  pub fn with_token_expiry(mut self, token_expiry_secs: u64) -> Self {
    self.token_expiry_secs = token_expiry_secs;
    self
  }

  /// Check that the selected auth method has what it needs.
  ///
  /// Token lifetimes outside [`crate::TOKEN_EXPIRY_PRESETS`] are accepted;
  /// only zero is rejected since it yields tokens that are already expired.
  pub fn validate(&self) -> Result<()> {
    if self.auth_method.requires_secret()
      && self.access_key.as_deref().map_or(true, str::is_empty)
    {
      return Err(Error::AccessKey(format!(
        "FCS_ACCESS_KEY must be set for auth method '{}'",
        self.auth_method
      )));
    }

    if self.auth_method == AuthMethod::Token && self.token_expiry_secs == 0 {
      return Err(Error::Config("Token expiry must be greater than zero".to_string()));
    }

    if self.base_url.trim().is_empty() {
      return Err(Error::Config("Base URL must not be empty".to_string()));
    }

    Ok(())
  }

  /// Whether the token lifetime is one of the documented presets
  pub fn has_documented_token_expiry(&self) -> bool {
    crate::is_documented_token_expiry(self.token_expiry_secs)
  }

  fn base() -> Self {
    Config {
      auth_method: AuthMethod::default(),
      access_key: None,
      public_key: None,
      token_expiry_secs: crate::DEFAULT_TOKEN_EXPIRY_SECS,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      connect_timeout_secs: crate::DEFAULT_CONNECT_TIMEOUT_SECS,
      base_url: crate::FCS_BASE_URL.to_string(),
    }
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("auth_method", &self.auth_method)
      .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
      .field("public_key", &self.public_key)
      .field("token_expiry_secs", &self.token_expiry_secs)
      .field("timeout_secs", &self.timeout_secs)
      .field("connect_timeout_secs", &self.connect_timeout_secs)
      .field("base_url", &self.base_url)
      .finish()
  }
}

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T> {
  match env::var(name) {
    Ok(value) => value.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    Err(_) => Ok(default),
  }
}
