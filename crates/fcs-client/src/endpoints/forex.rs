use super::{impl_endpoint_base, EndpointBase, MarketEndpoints};

use crate::transport::Transport;
use fcs_core::{Market, Params, Result};
use fcs_models::ApiResponse;
use std::sync::Arc;
use tracing::instrument;

/// Foreign exchange (forex) endpoints
///
/// The shared market endpoints (`list`, `latest`, `history`, `profile`,
/// indicators, ...) come from [`MarketEndpoints`]; this type adds the
/// forex-only ones.
pub struct ForexEndpoints {
  transport: Arc<Transport>,
}

impl ForexEndpoints {
  /// Create a new forex endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Convert an amount from one currency to another
  ///
  /// # Arguments
  ///
  /// * `pair1` - The currency to convert from (e.g., "EUR")
  /// * `pair2` - The currency to convert to (e.g., "USD")
  /// * `amount` - Amount of `pair1` to convert
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fcs_client::{FcsClient, Config};
  /// # async fn run() -> fcs_client::Result<()> {
  /// # let client = FcsClient::new(Config::from_env()?)?;
  /// let converted = client.forex().converter("EUR", "USD", 250.0).await?;
  /// println!("{:?}", converted.response_data());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn converter(&self, pair1: &str, pair2: &str, amount: f64) -> Result<ApiResponse> {
    let params = Params::new().with("pair1", pair1).with("pair2", pair2).with("amount", amount);
    self.call("converter", params).await
  }

  /// Latest rates of every currency quoted against `base`
  ///
  /// # Arguments
  ///
  /// * `base` - The base currency (e.g., "USD")
  /// * `kind` - Optional instrument type filter (e.g., "forex", "crypto")
  #[instrument(skip(self))]
  pub async fn base_latest(&self, base: &str, kind: Option<&str>) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", base).with_opt("type", kind);
    self.call("base_latest", params).await
  }

  /// Upcoming and recent economic events
  ///
  /// # Arguments
  ///
  /// * `country` - Optional country code filter (e.g., "US")
  /// * `from` / `to` - Optional date window, `YYYY-MM-DD`
  #[instrument(skip(self))]
  pub async fn economy_calendar(
    &self,
    country: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
  ) -> Result<ApiResponse> {
    let params = Params::new()
      .with_opt("country", country)
      .with_opt("from", from)
      .with_opt("to", to);
    self.call("economy_cal", params).await
  }
}

impl_endpoint_base!(ForexEndpoints);

impl MarketEndpoints for ForexEndpoints {
  fn market(&self) -> Market {
    Market::Forex
  }
}
