use crate::commands::{client, print_response};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use fcs_client::Params;

#[derive(Args, Debug)]
pub struct QueryCommand {
  /// Endpoint path relative to the API root, e.g. forex/latest
  pub path: String,

  /// Request parameter as key=value; repeatable
  #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
  pub params: Vec<(String, String)>,
}

pub async fn execute(cmd: QueryCommand, config: Config) -> Result<()> {
  let client = client(&config)?;
  let params: Params = cmd.params.into_iter().collect();

  let response = client.execute(&cmd.path, params).await?;
  print_response(&response, &config)
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
  let (key, value) =
    s.split_once('=').ok_or_else(|| format!("invalid parameter '{}', expected key=value", s))?;
  if key.trim().is_empty() {
    return Err(format!("invalid parameter '{}', key is empty", s));
  }
  Ok((key.trim().to_string(), value.to_string()))
}
