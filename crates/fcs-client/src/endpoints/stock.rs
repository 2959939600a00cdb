use super::{impl_endpoint_base, EndpointBase, MarketEndpoints};

use crate::transport::Transport;
use fcs_core::{Market, Params, Result};
use fcs_models::ApiResponse;
use std::sync::Arc;
use tracing::instrument;

/// Stock and index endpoints
pub struct StockEndpoints {
  transport: Arc<Transport>,
}

impl StockEndpoints {
  /// Create a new stock endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Market indices, optionally limited to one country or exchange
  #[instrument(skip(self))]
  pub async fn indices(&self, country: Option<&str>, exchange: Option<&str>) -> Result<ApiResponse> {
    let params = Params::new().with_opt("country", country).with_opt("exchange", exchange);
    self.call("indices", params).await
  }

  /// Financial statements for a company
  ///
  /// # Arguments
  ///
  /// * `symbol` - The ticker (e.g., "AAPL")
  /// * `kind` - Optional statement type: "income", "balance" or "cash"
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fcs_client::{FcsClient, Config};
  /// # async fn run() -> fcs_client::Result<()> {
  /// # let client = FcsClient::new(Config::from_env()?)?;
  /// let income = client.stock().financials("AAPL", Some("income")).await?;
  /// if !income.is_success() {
  ///     eprintln!("{}", income.error().unwrap_or_default());
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn financials(&self, symbol: &str, kind: Option<&str>) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", symbol).with_opt("type", kind);
    self.call("financials", params).await
  }

  /// Reported and estimated earnings
  #[instrument(skip(self))]
  pub async fn earnings(&self, symbol: &str) -> Result<ApiResponse> {
    self.call("earnings", Params::new().with("symbol", symbol)).await
  }

  /// Dividend history
  #[instrument(skip(self))]
  pub async fn dividends(&self, symbol: &str) -> Result<ApiResponse> {
    self.call("dividends", Params::new().with("symbol", symbol)).await
  }
}

impl_endpoint_base!(StockEndpoints);

impl MarketEndpoints for StockEndpoints {
  fn market(&self) -> Market {
    Market::Stock
  }
}
