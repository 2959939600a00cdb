use super::{impl_endpoint_base, EndpointBase, MarketEndpoints};

use crate::transport::Transport;
use fcs_core::{Market, Params, Result};
use fcs_models::ApiResponse;
use std::sync::Arc;
use tracing::instrument;

/// Cryptocurrency endpoints
pub struct CryptoEndpoints {
  transport: Arc<Transport>,
}

impl CryptoEndpoints {
  /// Create a new crypto endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Convert an amount between two coins or a coin and a fiat currency
  ///
  /// # Arguments
  ///
  /// * `pair1` - The asset to convert from (e.g., "BTC")
  /// * `pair2` - The asset to convert to (e.g., "USDT")
  /// * `amount` - Amount of `pair1` to convert
  #[instrument(skip(self))]
  pub async fn converter(&self, pair1: &str, pair2: &str, amount: f64) -> Result<ApiResponse> {
    let params = Params::new().with("pair1", pair1).with("pair2", pair2).with("amount", amount);
    self.call("converter", params).await
  }

  /// Latest prices of every pair quoted against `base`
  #[instrument(skip(self))]
  pub async fn base_latest(&self, base: &str, exchange: Option<&str>) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", base).with_opt("exchange", exchange);
    self.call("base_latest", params).await
  }

  /// Market cap, supply and rank for a coin
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fcs_client::{FcsClient, Config};
  /// # async fn run() -> fcs_client::Result<()> {
  /// # let client = FcsClient::new(Config::from_env()?)?;
  /// let btc = client.crypto().coin_data("BTC").await?;
  /// if let Some(data) = btc.response_data() {
  ///     println!("{}", data);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn coin_data(&self, symbol: &str) -> Result<ApiResponse> {
    self.call("coin_data", Params::new().with("symbol", symbol)).await
  }
}

impl_endpoint_base!(CryptoEndpoints);

impl MarketEndpoints for CryptoEndpoints {
  fn market(&self) -> Market {
    Market::Crypto
  }
}
