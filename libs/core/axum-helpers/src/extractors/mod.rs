//! Extractors whose rejections render as the failure envelope.

pub mod query;

pub use query::QueryParams;
