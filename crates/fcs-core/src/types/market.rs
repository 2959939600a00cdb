//! Market-related types

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Asset class served by the API; each has its own endpoint namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Forex,
    Crypto,
    Stock,
}

impl Market {
    /// Path segment that prefixes every endpoint of this market
    pub fn prefix(&self) -> &'static str {
        match self {
            Market::Forex => "forex",
            Market::Crypto => "crypto",
            Market::Stock => "stock",
        }
    }

    /// Full relative path of `endpoint` within this market, e.g. `forex/latest`
    pub fn path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.prefix(), endpoint.trim_start_matches('/'))
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forex" | "fx" => Ok(Market::Forex),
            "crypto" => Ok(Market::Crypto),
            "stock" | "stocks" => Ok(Market::Stock),
            other => Err(Error::Parse(format!("Unknown market '{}'", other))),
        }
    }
}
