//! Movie discovery core.
//!
//! Trending, search and detail views over a TMDB-compatible catalog:
//! a typed catalog client, a debouncer for typed queries, 1-based grid
//! pagination, and MVI view controllers that only ever apply the newest
//! response.

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod pagination;
pub mod ui;
