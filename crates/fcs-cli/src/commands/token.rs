use crate::commands::render;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct TokenCommand {
  /// Token lifetime in seconds (300, 900, 1800, 3600 or 86400)
  #[arg(short, long)]
  expiry: Option<u64>,
}

pub fn execute(cmd: TokenCommand, config: Config) -> Result<()> {
  let mut api_config = config.api_config.clone();
  if let Some(expiry) = cmd.expiry {
    api_config = api_config.with_token_expiry(expiry);
  }
  api_config.validate().context("Invalid token settings")?;

  if !api_config.has_documented_token_expiry() {
    warn!("Token expiry of {}s is not a documented value", api_config.token_expiry_secs);
  }

  let token = api_config.generate_token().context("Failed to sign token")?;
  info!("Generated token valid until {}", token.expiry);

  let value = serde_json::to_value(&token)?;
  println!("{}", render(&value, config.compact_output)?);
  Ok(())
}
