//! # DevDisplay Architecture
//!
//! DevDisplay is a **UI-agnostic profile directory engine**. It aggregates
//! many small, independently authored profile files, shuffles them into a
//! display order, searches them by name, location or skill, and serves the
//! results in fixed pages of 20. The bundled binary is one client of the
//! library; a web or TUI front end would talk to the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders pages, owns stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade holding the current BrowserState             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, browser.rs)                  │
//! │  - Pure state transitions: load, search, next/prev page     │
//! │  - search.rs, paginate.rs, shuffle.rs, normalize.rs         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (loader.rs, source/)                          │
//! │  - Concurrent fetch of every manifest entry                 │
//! │  - FileFetcher, HttpFetcher, InMemoryFetcher                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session Lifecycle
//!
//! 1. The loader fetches every source once, concurrently, and concatenates
//!    the records in manifest order. Broken sources are logged and skipped.
//! 2. The directory is shuffled exactly once into the display order.
//! 3. Searches build a filtered view and switch the state to `Searching`;
//!    page requests move one page at a time over whichever dataset is active.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go through `tracing`; user-facing notes travel as
//! [`commands::CmdMessage`] values.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`browser`]: immutable session state and its transitions
//! - [`commands`]: load, search and page commands
//! - [`loader`]: concurrent source aggregation and the loading signal
//! - [`source`]: fetcher trait and implementations
//! - [`search`], [`normalize`], [`shuffle`], [`paginate`]: the pure engines
//! - [`model`]: `ProfileRecord`, `SearchQuery`, `Criterion`, `Mode`
//! - [`config`]: site configuration and manifest reading
//! - [`error`]: error types

pub mod api;
pub mod browser;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod paginate;
pub mod search;
pub mod shuffle;
pub mod source;

#[cfg(test)]
pub(crate) mod test_utils;
