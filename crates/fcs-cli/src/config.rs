use anyhow::{Context, Result};
use fcs_core::Config as CoreConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  /// Print single-line JSON instead of pretty-printed output
  pub compact_output: bool,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config = CoreConfig::from_env()
      .context("Failed to load FCS API configuration (FCS_ACCESS_KEY, FCS_AUTH_METHOD, ...)")?;

    let compact_output = env::var("FCS_COMPACT_OUTPUT")
      .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
      .unwrap_or(false);

    Ok(Self { api_config, compact_output })
  }
}
