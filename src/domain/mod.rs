//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and the rules that belong to them
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom`/`From` conversions (where the mapping is non-trivial)
//! - `state.rs`: Client-side mirrors with update methods (cart only)
//! - `client.rs`: Sub-client with HTTP methods

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod order;
pub mod wishlist;
