//! # fcs-models
//!
//! Data models for FCS API responses.
//!
//! Every endpoint answers with the same JSON envelope (`status`, `code`,
//! `msg`, `response`, `info`). [`ApiResponse`] keeps that envelope as a
//! generic object and exposes the success/error accessors the client
//! builds on. Payloads can be decoded into caller types with
//! [`ApiResponse::data_as`].
//!
//! ## Usage
//!
//! ```ignore
//! use fcs_models::ApiResponse;
//!
//! let response = ApiResponse::from_json(&body)?;
//! if response.is_success() {
//!     println!("{:?}", response.response_data());
//! } else {
//!     eprintln!("{}", response.error().unwrap_or_default());
//! }
//! ```

#![warn(clippy::all)]

pub mod response;

pub use response::{ApiResponse, ResponseInfo, UNKNOWN_ERROR};
