//! HTTP client layer: `StoreHttp`, one call per storefront endpoint.

pub mod client;

pub use client::StoreHttp;
