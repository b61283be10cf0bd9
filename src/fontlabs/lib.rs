//! # Fontlabs Architecture
//!
//! Fontlabs is a **UI-agnostic font catalog library**. The CLI in this crate is
//! one client of it; a web view or a TUI could drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, prints, owns exit codes and logging    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the process-wide stylesheet registry                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per view or action, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Feed (feed/)                                               │
//! │  - PagedFeed state machine with generation guard            │
//! │  - FeedSession driver, viewport sentinel, stylesheets       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - FileCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout or stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Paging Model
//!
//! A feed shows a catalog slice ordered by downloads and grows one page at a time
//! when the viewport sentinel reports that the end of the list is near. Fetches
//! are split into [`feed::PagedFeed::begin_next_page`] and
//! [`feed::PagedFeed::complete`]; everything that can happen while a fetch is
//! outstanding (more signals, a category switch) happens between those two
//! calls. See [`feed`] for the state machine.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and feed**: thorough unit tests against `InMemoryCatalog`.
//! 2. **API**: dispatch tests.
//! 3. **CLI**: `assert_cmd` tests in `tests/` against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each view and action
//! - [`feed`]: Paged feed, session driver, stylesheet registry, sentinel
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Font`, `FontCategory`, `FontLicense`)
//! - [`catalog`]: Google Fonts API import
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod store;
