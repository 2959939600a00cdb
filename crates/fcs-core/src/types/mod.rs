//! Common types used across fcs-* crates

pub mod common;
pub mod market;

pub use common::Period;
pub use market::Market;
