//! Request authentication.
//!
//! Every request carries the parameters produced here for the configured
//! [`AuthMethod`]:
//!
//! - `access_key`: the secret itself, as `access_key`
//! - `ip_whitelist`: nothing, the server checks the caller's address
//! - `token`: a short-lived HMAC-SHA256 signature as `_token`, `_expiry`
//!   and `_public_key`
//!
//! Token mode lets a trusted backend mint credentials for an untrusted
//! frontend without handing out the secret.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::params::Params;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

pub const ACCESS_KEY_PARAM: &str = "access_key";
pub const TOKEN_PARAM: &str = "_token";
pub const EXPIRY_PARAM: &str = "_expiry";
pub const PUBLIC_KEY_PARAM: &str = "_public_key";

/// Every parameter name the auth layer may write
pub const AUTH_PARAM_KEYS: [&str; 4] = [ACCESS_KEY_PARAM, TOKEN_PARAM, EXPIRY_PARAM, PUBLIC_KEY_PARAM];

/// How requests are authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
  /// Send the secret access key with every request
  #[default]
  AccessKey,
  /// Send nothing; the server allows the caller's IP address
  IpWhitelist,
  /// Send a time-boxed signed token
  Token,
}

impl AuthMethod {
  /// Whether this method needs the secret access key
  pub fn requires_secret(&self) -> bool {
    matches!(self, AuthMethod::AccessKey | AuthMethod::Token)
  }
}

impl fmt::Display for AuthMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AuthMethod::AccessKey => write!(f, "access_key"),
      AuthMethod::IpWhitelist => write!(f, "ip_whitelist"),
      AuthMethod::Token => write!(f, "token"),
    }
  }
}

impl FromStr for AuthMethod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "access_key" => Ok(AuthMethod::AccessKey),
      "ip_whitelist" => Ok(AuthMethod::IpWhitelist),
      "token" => Ok(AuthMethod::Token),
      other => Err(Error::Config(format!(
        "Unknown auth method '{}', expected access_key, ip_whitelist or token",
        other
      ))),
    }
  }
}

/// A signed, time-boxed token.
///
/// Serializes with the wire parameter names so it can be handed to a
/// frontend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedToken {
  #[serde(rename = "_token")]
  pub token: String,

  /// Unix timestamp (seconds) after which the server rejects the token
  #[serde(rename = "_expiry")]
  pub expiry: i64,

  #[serde(rename = "_public_key")]
  pub public_key: String,
}

impl SignedToken {
  pub fn is_expired_at(&self, now: i64) -> bool {
    now >= self.expiry
  }

  pub fn to_params(&self) -> Params {
    Params::new()
      .with(TOKEN_PARAM, self.token.as_str())
      .with(EXPIRY_PARAM, self.expiry)
      .with(PUBLIC_KEY_PARAM, self.public_key.as_str())
  }
}

/// Lowercase hex HMAC-SHA256 of `public_key ++ expiry`, keyed by the secret
pub fn sign(access_key: &str, public_key: &str, expiry: i64) -> Result<String> {
  if access_key.is_empty() {
    return Err(Error::AccessKey("access key is required to sign a token".to_string()));
  }

  let mut mac = HmacSha256::new_from_slice(access_key.as_bytes())
    .map_err(|e| Error::AccessKey(format!("Invalid access key: {}", e)))?;
  mac.update(public_key.as_bytes());
  mac.update(expiry.to_string().as_bytes());

  Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Current Unix time in seconds
pub fn unix_now() -> i64 {
  Utc::now().timestamp()
}

impl Config {
  /// Generate a signed token that expires `token_expiry_secs` from now
  pub fn generate_token(&self) -> Result<SignedToken> {
    self.generate_token_at(unix_now())
  }

  /// Generate a signed token as if the clock read `now`
  pub fn generate_token_at(&self, now: i64) -> Result<SignedToken> {
    let access_key = self.secret()?;
    if self.token_expiry_secs == 0 {
      return Err(Error::Config("Token expiry must be greater than zero".to_string()));
    }
    let lifetime = i64::try_from(self.token_expiry_secs)
      .map_err(|_| Error::Config(format!("Token expiry {} is out of range", self.token_expiry_secs)))?;
    let expiry = now.saturating_add(lifetime);
    let public_key = self.public_key.clone().unwrap_or_default();
    let token = sign(access_key, &public_key, expiry)?;

    Ok(SignedToken { token, expiry, public_key })
  }

  /// Parameters to attach to the next request
  pub fn auth_params(&self) -> Result<Params> {
    self.auth_params_at(unix_now())
  }

  /// Parameters to attach to a request made at `now`
  pub fn auth_params_at(&self, now: i64) -> Result<Params> {
    match self.auth_method {
      AuthMethod::AccessKey => Ok(Params::new().with(ACCESS_KEY_PARAM, self.secret()?)),
      AuthMethod::IpWhitelist => Ok(Params::new()),
      AuthMethod::Token => Ok(self.generate_token_at(now)?.to_params()),
    }
  }

  fn secret(&self) -> Result<&str> {
    match self.access_key.as_deref() {
      Some(key) if !key.is_empty() => Ok(key),
      _ => Err(Error::AccessKey(format!(
        "access key is required for auth method '{}'",
        self.auth_method
      ))),
    }
  }
}
