pub mod crypto;
pub mod forex;
pub mod stock;

use crate::query::{AdvancedQuery, HistoryQuery, ListFilter, TopMoversQuery};
use crate::transport::Transport;
use fcs_core::{Market, Params, Period, Result};
use fcs_models::ApiResponse;
use std::sync::Arc;
use tracing::debug;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Endpoints every market exposes under its own prefix.
///
/// Implementors only name their [`Market`]; each method maps its typed
/// arguments onto request parameters and hands them to the transport.
#[allow(async_fn_in_trait)]
pub trait MarketEndpoints: EndpointBase {
  /// Which market's namespace the requests go to
  fn market(&self) -> Market;

  /// Call `<market>/<endpoint>` with `params`
  async fn call(&self, endpoint: &str, params: Params) -> Result<ApiResponse> {
    let path = self.market().path(endpoint);
    debug!("Calling {} with {} params", path, params.len());
    self.transport().execute(&path, params).await
  }

  /// Symbols available in this market
  async fn list(&self, filter: &ListFilter) -> Result<ApiResponse> {
    self.call("list", filter.to_params()).await
  }

  /// Latest price for one or more comma-separated symbols
  async fn latest(&self, symbol: &str, exchange: Option<&str>) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", symbol).with_opt("exchange", exchange);
    self.call("latest", params).await
  }

  /// Historical candles
  async fn history(&self, symbol: &str, query: &HistoryQuery) -> Result<ApiResponse> {
    let mut params = query.to_params();
    params.insert("symbol", symbol);
    self.call("history", params).await
  }

  /// Descriptive profile of a symbol
  async fn profile(&self, symbol: &str) -> Result<ApiResponse> {
    self.call("profile", Params::new().with("symbol", symbol)).await
  }

  /// Exchanges / liquidity providers the market is sourced from
  async fn exchanges(&self) -> Result<ApiResponse> {
    self.call("exchanges", Params::new()).await
  }

  /// Free-text symbol search
  async fn search(&self, term: &str) -> Result<ApiResponse> {
    self.call("search", Params::new().with("search", term)).await
  }

  /// Simple and exponential moving averages
  async fn moving_averages(&self, symbol: &str, period: Period) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", symbol).with("period", period);
    self.call("ma_avg", params).await
  }

  /// Oscillators and other technical indicators
  async fn indicators(&self, symbol: &str, period: Period) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", symbol).with("period", period);
    self.call("indicators", params).await
  }

  /// Classic, Fibonacci, Camarilla, Woodie and DeMark pivot levels
  async fn pivot_points(&self, symbol: &str, period: Period) -> Result<ApiResponse> {
    let params = Params::new().with("symbol", symbol).with("period", period);
    self.call("pivot_points", params).await
  }

  /// Performance over standard look-back windows
  async fn performance(&self, symbol: &str) -> Result<ApiResponse> {
    self.call("performance", Params::new().with("symbol", symbol)).await
  }

  /// Biggest gainers, losers or most active symbols
  async fn top_movers(&self, query: &TopMoversQuery) -> Result<ApiResponse> {
    self.call("top_movers", query.to_params()).await
  }

  /// Combined filtering, sorting and paging in one request
  async fn advanced(&self, query: &AdvancedQuery) -> Result<ApiResponse> {
    self.call("advance", query.to_params()).await
  }
}
