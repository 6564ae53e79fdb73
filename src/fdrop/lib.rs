//! # fdrop Architecture
//!
//! fdrop is a clipboard for files: stage paths with `add`, then `copy`,
//! `move` or `paste` them somewhere else, with every completed transfer
//! recorded in an append-only log. The crate is a library with a thin CLI
//! client on top.
//!
//! ```text
//! CLI layer (args.rs + main.rs)
//!   - clap parsing, colored output, exit status
//!   - the ONLY place that knows about stdout/stderr/exit codes
//!            │
//!            ▼
//! API layer (api.rs)
//!   - FdropApi<S: StashStore>, thin dispatch over commands
//!            │
//!            ▼
//! Command layer (commands/*.rs)
//!   - pure logic, returns structured CmdResult values
//!   - per-item problems become leveled messages, never aborts a batch
//!            │
//!            ▼
//! Storage layer (store/)
//!   - StashStore trait; FileStore (production), InMemoryStore (testing)
//!   - stash saved by whole-file replace; action log is append-only
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: add / list / transfer / clean logic
//! - [`store`]: stash persistence and the action log
//! - [`model`]: core data types ([`model::StashItem`], [`model::Action`])
//! - [`token`]: index-or-name selection tokens and their resolver
//! - [`fsops`]: recursive copy and rename primitives
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod fsops;
pub mod model;
pub mod store;
pub mod token;
