//! # Rolodex Architecture
//!
//! Rolodex is a small contact directory: named contacts with validated phone
//! numbers and optional birthdays, kept in memory while running and saved to
//! a snapshot file between runs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results, owns exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the session: Directory + SnapshotStore             │
//! │  - Load at start, save at exit                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One verb per module, returns CmdResult                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Directory (model/, directory.rs)                   │
//! │  Storage Layer (store/)                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr; diagnostics go
//! through `tracing` and the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per command verb
//! - [`directory`]: The contact collection, pagination and phone search
//! - [`model`]: `Name`, `Phone`, `Birthday` and `Record`
//! - [`store`]: Snapshot persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;
