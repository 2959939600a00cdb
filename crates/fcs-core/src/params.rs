//! Request parameters sent as the form body of every API call

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A primitive parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      // the API reads flags as 0/1
      ParamValue::Bool(true) => write!(f, "1"),
      ParamValue::Bool(false) => write!(f, "0"),
      ParamValue::Int(v) => write!(f, "{}", v),
      ParamValue::Float(v) => write!(f, "{}", v),
      ParamValue::Str(v) => write!(f, "{}", v),
    }
  }
}

impl ParamValue {
  fn is_blank(&self) -> bool {
    matches!(self, ParamValue::Str(s) if s.is_empty())
  }
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    ParamValue::Str(value.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    ParamValue::Str(value)
  }
}

impl From<&String> for ParamValue {
  fn from(value: &String) -> Self {
    ParamValue::Str(value.clone())
  }
}

impl From<bool> for ParamValue {
  fn from(value: bool) -> Self {
    ParamValue::Bool(value)
  }
}

impl From<i32> for ParamValue {
  fn from(value: i32) -> Self {
    ParamValue::Int(value.into())
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    ParamValue::Int(value)
  }
}

impl From<u32> for ParamValue {
  fn from(value: u32) -> Self {
    ParamValue::Int(value.into())
  }
}

impl From<u64> for ParamValue {
  fn from(value: u64) -> Self {
    i64::try_from(value).map(ParamValue::Int).unwrap_or_else(|_| ParamValue::Str(value.to_string()))
  }
}

impl From<f64> for ParamValue {
  fn from(value: f64) -> Self {
    ParamValue::Float(value)
  }
}

/// Name to value mapping for one request.
///
/// Keys are kept sorted so the encoded body is stable, which makes requests
/// easy to compare in logs and tests. Order carries no meaning for the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder form of [`Params::insert`]
  pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Builder form of [`Params::insert_opt`]
  pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
    self.insert_opt(key, value);
    self
  }

  /// Set a parameter, replacing any previous value for the key
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
    self.0.insert(key.into(), value.into());
    self
  }

  /// Set a parameter only when a value is present.
  ///
  /// `None` and empty strings leave the mapping untouched so unset optional
  /// arguments never reach the wire as `key=`.
  pub fn insert_opt<V: Into<ParamValue>>(
    &mut self,
    key: impl Into<String>,
    value: Option<V>,
  ) -> &mut Self {
    if let Some(value) = value.map(Into::into) {
      if !value.is_blank() {
        self.0.insert(key.into(), value);
      }
    }
    self
  }

  /// Apply `other` on top of `self`; keys in `other` win
  pub fn merge_over(&mut self, other: Params) {
    self.0.extend(other.0);
  }

  pub fn get(&self, key: &str) -> Option<&ParamValue> {
    self.0.get(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.contains_key(key)
  }

  pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
    self.0.remove(key)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
    self.0.iter()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  /// Render as string pairs ready for form encoding
  pub fn to_form_pairs(&self) -> Vec<(String, String)> {
    self.0.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
  }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Params::new();
    for (k, v) in iter {
      params.insert(k, v);
    }
    params
  }
}

impl IntoIterator for Params {
  type Item = (String, ParamValue);
  type IntoIter = btree_map::IntoIter<String, ParamValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Params {
  type Item = (&'a String, &'a ParamValue);
  type IntoIter = btree_map::Iter<'a, String, ParamValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
