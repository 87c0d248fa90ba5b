//! # Artcat Architecture
//!
//! Artcat is a **UI-agnostic catalogue library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the loaded catalogue                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: add, edit, delete, get, import      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Catalogue View
//!
//! Two record sets share one namespace: an immutable, compiled-in set of default
//! records and the mutable, persisted set of custom records. `catalog::Catalog`
//! merges them into a single lookup surface. A code can never resolve to two
//! records: collisions with a default code are rejected at insertion time rather
//! than shadowed. See catalog.rs for more information.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web form, a TUI, or any other UI.
//!
//! ## Persistence Model
//!
//! Custom records are a single JSON document, loaded exactly once at startup and
//! rewritten in full after every successful mutation. A failed write rolls the
//! in-memory change back, so memory and disk never diverge. Bulk import batches
//! all of its insertions into one write.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing lives.
//!
//! 2. **Storage** (`store/`): `FileStore` tests run against temp directories,
//!    including atomicity and corrupt-document recovery.
//!
//! 3. **CLI** (`tests/`): end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`catalog`]: Merged default + custom namespace
//! - [`model`]: Core data types (`Code`, `Record`, `RecordDraft`)
//! - [`validate`]: Pure field validators
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
