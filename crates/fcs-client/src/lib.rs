//! # fcs-client
//!
//! A client for the FCS market-data REST API: forex, crypto and stock
//! quotes, history, profiles and technical indicators.
//!
//! ## Features
//!
//! - **Three auth methods**: access key, IP whitelist, or short-lived
//!   HMAC-SHA256 signed tokens
//! - **Async/Await**: Built on tokio and reqwest
//! - **One request path**: every endpoint goes through [`Transport::execute`],
//!   which applies authentication and normalizes failures
//! - **Configurable**: Environment-based configuration via fcs-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fcs_client::{Config, FcsClient, MarketEndpoints};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FcsClient::new(config)?;
//!
//!     let latest = client.forex().latest("EUR/USD", None).await?;
//!     if latest.is_success() {
//!         println!("{:?}", latest.response_data());
//!     } else {
//!         eprintln!("API error: {}", latest.error().unwrap_or_default());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Requests return `Result<ApiResponse, fcs_core::Error>`:
//!
//! - `Ok` with `status: true`: the payload is in `response_data()`
//! - `Ok` with `status: false`: the server rejected the call (bad symbol,
//!   exhausted credits, ...), see `error()`
//! - `Err(Error::Request { .. })`: network failure, timeout or an
//!   unparseable body
//! - `Err(Error::AccessKey(..))`: the auth method needs a secret that is
//!   not configured
//!
//! The client also remembers the last response, readable through
//! [`FcsClient::is_success`], [`FcsClient::error`] and
//! [`FcsClient::response_data`].

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod query;
pub mod transport;

// Re-export the main client and common types
pub use client::FcsClient;
pub use fcs_core::{AuthMethod, Config, Error, Market, ParamValue, Params, Period, Result, SignedToken};
pub use fcs_models::*;
pub use query::{AdvancedQuery, HistoryQuery, ListFilter, TopMoversQuery};
pub use transport::Transport;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  crypto::CryptoEndpoints, forex::ForexEndpoints, stock::StockEndpoints, EndpointBase,
  MarketEndpoints,
};
