//! Common types used across the API

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle period for history, indicator and pivot point requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Min1,
    Min5,
    Min15,
    Min30,
    Hour1,
    Hour2,
    Hour4,
    Hour5,
    Day1,
    Week1,
    Month1,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Min1 => write!(f, "1m"),
            Period::Min5 => write!(f, "5m"),
            Period::Min15 => write!(f, "15m"),
            Period::Min30 => write!(f, "30m"),
            Period::Hour1 => write!(f, "1h"),
            Period::Hour2 => write!(f, "2h"),
            Period::Hour4 => write!(f, "4h"),
            Period::Hour5 => write!(f, "5h"),
            Period::Day1 => write!(f, "1d"),
            Period::Week1 => write!(f, "1w"),
            Period::Month1 => write!(f, "1month"),
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" | "1min" => Ok(Period::Min1),
            "5m" | "5min" => Ok(Period::Min5),
            "15m" | "15min" => Ok(Period::Min15),
            "30m" | "30min" => Ok(Period::Min30),
            "1h" => Ok(Period::Hour1),
            "2h" => Ok(Period::Hour2),
            "4h" => Ok(Period::Hour4),
            "5h" => Ok(Period::Hour5),
            "1d" => Ok(Period::Day1),
            "1w" => Ok(Period::Week1),
            "1month" | "1M" => Ok(Period::Month1),
            other => Err(Error::Parse(format!("Unknown period '{}'", other))),
        }
    }
}

impl From<Period> for crate::params::ParamValue {
    fn from(period: Period) -> Self {
        crate::params::ParamValue::Str(period.to_string())
    }
}
