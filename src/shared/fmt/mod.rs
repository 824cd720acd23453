//! Display formatting for amounts shown on the storefront.

pub mod money;
