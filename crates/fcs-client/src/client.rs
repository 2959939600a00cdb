/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{crypto::CryptoEndpoints, forex::ForexEndpoints, stock::StockEndpoints};

use crate::transport::Transport;
use fcs_core::{Config, Params, Result, SignedToken};
use fcs_models::ApiResponse;
use serde_json::Value;
use std::sync::Arc;

/// Main FCS API client
///
/// Provides access to the forex, crypto and stock endpoints through
/// endpoint groups that share one transport. Authentication is applied to
/// every request according to the configured auth method.
///
/// # Examples
///
/// ```ignore
/// use fcs_client::{FcsClient, MarketEndpoints, Period, HistoryQuery};
/// use fcs_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = FcsClient::new(config)?;
///
///     // Latest EUR/USD quote
///     let latest = client.forex().latest("EUR/USD", None).await?;
///     println!("{:?}", latest.response_data());
///
///     // Hourly BTC candles
///     let query = HistoryQuery::new(Period::Hour1).length(100);
///     let history = client.crypto().history("BTC/USDT", &query).await?;
///     println!("ok: {}", history.is_success());
///
///     Ok(())
/// }
/// ```
pub struct FcsClient {
  transport: Arc<Transport>,
}

impl FcsClient {
  /// Create a new FCS API client
  ///
  /// # Arguments
  ///
  /// * `config` - Credentials, auth method and timeouts
  ///
  /// # Errors
  ///
  /// Returns a configuration error if the auth method needs an access key
  /// that is missing, or an HTTP error if the client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use fcs_client::FcsClient;
  /// use fcs_core::Config;
  ///
  /// let config = Config::from_env().expect("Missing FCS_ACCESS_KEY");
  /// let client = FcsClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config)?) })
  }

  /// Get access to forex endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let rate = client.forex().latest("EUR/USD", None).await?;
  /// let converted = client.forex().converter("EUR", "JPY", 100.0).await?;
  /// ```
  pub fn forex(&self) -> ForexEndpoints {
    ForexEndpoints::new(self.transport.clone())
  }

  /// Get access to cryptocurrency endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let btc = client.crypto().latest("BTC/USDT", Some("BINANCE")).await?;
  /// ```
  pub fn crypto(&self) -> CryptoEndpoints {
    CryptoEndpoints::new(self.transport.clone())
  }

  /// Get access to stock endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let profile = client.stock().profile("AAPL").await?;
  /// ```
  pub fn stock(&self) -> StockEndpoints {
    StockEndpoints::new(self.transport.clone())
  }

  /// Call any endpoint by relative path, e.g. `forex/latest`
  ///
  /// The returned value is authoritative; the last-response accessors below
  /// are only reliable when requests are not issued concurrently.
  pub async fn execute(&self, path: &str, params: Params) -> Result<ApiResponse> {
    self.transport.execute(path, params).await
  }

  /// Sign a token that a browser or other untrusted client can send instead
  /// of the access key
  pub fn generate_token(&self) -> Result<SignedToken> {
    self.transport.generate_token()
  }

  /// The response of the most recently completed request
  pub fn last_response(&self) -> Option<ApiResponse> {
    self.transport.last_response()
  }

  /// Whether the last response reported `status: true`
  pub fn is_success(&self) -> bool {
    self.transport.is_success()
  }

  /// Message of the last failure, `None` after a success
  pub fn error(&self) -> Option<String> {
    self.transport.error()
  }

  /// Payload of the last response
  pub fn response_data(&self) -> Option<Value> {
    self.transport.response_data()
  }

  /// Change the request and connect timeouts.
  ///
  /// Applies to every endpoint group of this client, including ones
  /// obtained earlier.
  pub fn set_timeouts(&self, timeout_secs: u64, connect_timeout_secs: u64) -> Result<()> {
    self.transport.set_timeouts(timeout_secs, connect_timeout_secs)
  }

  pub fn config(&self) -> Config {
    self.transport.config()
  }

  /// Get a reference to the transport layer
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

impl std::fmt::Debug for FcsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FcsClient").field("transport", &self.transport).finish()
  }
}
