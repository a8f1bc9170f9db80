//! Paginated state core for the nations dataset.
//!
//! A predictable store with intent-driven transitions ([`store`]), async
//! fetch orchestration against the REST backend ([`api`]) and pure
//! view-model selectors, plus a command-line surface ([`cli`]).

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
