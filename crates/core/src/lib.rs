//! Shared domain types for the EMR backend.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling.

pub mod error;
pub mod filter;
pub mod paging;
pub mod types;
