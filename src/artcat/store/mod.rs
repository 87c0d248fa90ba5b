//! # Storage Layer
//!
//! The custom-record set is persisted as **one JSON document** mapping code to
//! record. Every save rewrites the whole document; every load reads the whole
//! document. With catalogues in the tens-to-thousands range this keeps the
//! consistency story trivial: the document on disk is always the result of one
//! complete save.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The full record map in a single `records.json`
//!   - Writes go through a temp file and an atomic rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Corruption Policy
//!
//! A document that no longer parses is reported, not fatal: `load` returns an
//! empty map with `corrupt_discarded` set, and the application starts empty.
//! The broken document is overwritten on the next save.

use crate::error::Result;
use crate::model::{Code, Record};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// The persisted document: every custom record, keyed by code.
pub type RecordMap = BTreeMap<Code, Record>;

/// Result of loading the store.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: RecordMap,
    /// True when the stored document existed but did not parse; the records
    /// map is empty in that case and the old content is gone on next save.
    pub corrupt_discarded: bool,
}

/// Abstract interface for custom-record persistence.
///
/// Implementations own on-disk consistency: a `load` following a completed
/// `save` must reproduce the saved map exactly, and a crashed `save` must not
/// leave a half-written document behind.
pub trait RecordStore {
    /// Read the full record map. A missing document is an empty map.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the stored document with the given map.
    fn save(&mut self, records: &RecordMap) -> Result<()>;
}
