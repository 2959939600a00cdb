pub mod auth;
pub mod config;
pub mod error;
pub mod params;
pub mod types;

pub use auth::{AuthMethod, SignedToken};
pub use config::Config;
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use types::{Market, Period};

/// Base URL for the FCS API
pub const FCS_BASE_URL: &str = "https://api-v4.fcsapi.com/";

/// Token lifetime used when none is configured
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 3600;

/// Token lifetimes the API documents; others are sent as-is
pub const TOKEN_EXPIRY_PRESETS: [u64; 5] = [300, 900, 1800, 3600, 86400];

/// Network timeouts
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Whether `secs` is one of [`TOKEN_EXPIRY_PRESETS`]
pub fn is_documented_token_expiry(secs: u64) -> bool {
  TOKEN_EXPIRY_PRESETS.contains(&secs)
}
