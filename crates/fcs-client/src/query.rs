//! Optional arguments for the endpoints that take more than a symbol.
//!
//! Every field is optional except where noted; unset fields are left out of
//! the request entirely.

use fcs_core::{ParamValue, Params, Period};

/// Filter for `*/list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
  /// Instrument type, e.g. `forex`, `crypto`, `stock`, `index`
  pub kind: Option<String>,
  pub sub_type: Option<String>,
  pub exchange: Option<String>,
  pub country: Option<String>,
}

impl ListFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn kind(mut self, kind: impl Into<String>) -> Self {
    self.kind = Some(kind.into());
    self
  }

  pub fn sub_type(mut self, sub_type: impl Into<String>) -> Self {
    self.sub_type = Some(sub_type.into());
    self
  }

  pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
    self.exchange = Some(exchange.into());
    self
  }

  pub fn country(mut self, country: impl Into<String>) -> Self {
    self.country = Some(country.into());
    self
  }

  pub fn to_params(&self) -> Params {
    Params::new()
      .with_opt("type", self.kind.as_deref())
      .with_opt("sub_type", self.sub_type.as_deref())
      .with_opt("exchange", self.exchange.as_deref())
      .with_opt("country", self.country.as_deref())
  }
}

/// Window and paging for `*/history`
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
  /// Candle period; always sent
  pub period: Period,
  /// Number of candles
  pub length: Option<u32>,
  /// Start date, `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`
  pub from: Option<String>,
  /// End date, same format as `from`
  pub to: Option<String>,
  pub page: Option<u32>,
  /// Ask for the compact chart layout
  pub is_chart: Option<bool>,
}

impl Default for HistoryQuery {
  fn default() -> Self {
    Self { period: Period::Day1, length: None, from: None, to: None, page: None, is_chart: None }
  }
}

impl HistoryQuery {
  pub fn new(period: Period) -> Self {
    Self { period, ..Self::default() }
  }

  pub fn length(mut self, length: u32) -> Self {
    self.length = Some(length);
    self
  }

  pub fn from(mut self, from: impl Into<String>) -> Self {
    self.from = Some(from.into());
    self
  }

  pub fn to(mut self, to: impl Into<String>) -> Self {
    self.to = Some(to.into());
    self
  }

  pub fn page(mut self, page: u32) -> Self {
    self.page = Some(page);
    self
  }

  pub fn chart(mut self, is_chart: bool) -> Self {
    self.is_chart = Some(is_chart);
    self
  }

  pub fn to_params(&self) -> Params {
    Params::new()
      .with("period", self.period)
      .with_opt("length", self.length)
      .with_opt("from", self.from.as_deref())
      .with_opt("to", self.to.as_deref())
      .with_opt("page", self.page)
      .with_opt("is_chart", self.is_chart)
  }
}

/// Ranking options for `*/top_movers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopMoversQuery {
  /// `gainers`, `losers` or `active`
  pub kind: Option<String>,
  pub sort_by: Option<String>,
  pub limit: Option<u32>,
  pub exchange: Option<String>,
}

impl TopMoversQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn kind(mut self, kind: impl Into<String>) -> Self {
    self.kind = Some(kind.into());
    self
  }

  pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
    self.sort_by = Some(sort_by.into());
    self
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
    self.exchange = Some(exchange.into());
    self
  }

  pub fn to_params(&self) -> Params {
    Params::new()
      .with_opt("type", self.kind.as_deref())
      .with_opt("sort_by", self.sort_by.as_deref())
      .with_opt("limit", self.limit)
      .with_opt("exchange", self.exchange.as_deref())
  }
}

/// Free-form filters for `*/advance`.
///
/// The advanced endpoint accepts many combinable filters (symbol lists,
/// price and change ranges, sorting, paging), so this is a thin wrapper over
/// [`Params`] rather than a fixed struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedQuery(Params);

impl AdvancedQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn filter(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.0.insert(key, value);
    self
  }

  pub fn filter_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
    self.0.insert_opt(key, value);
    self
  }

  pub fn to_params(&self) -> Params {
    self.0.clone()
  }
}

impl From<Params> for AdvancedQuery {
  fn from(params: Params) -> Self {
    Self(params)
  }
}
