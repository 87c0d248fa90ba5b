//! # API Facade
//!
//! The single entry point for all catalogue operations, regardless of the UI
//! being used. A thin dispatch layer: it owns the store and the loaded
//! catalogue, forwards to the command modules, and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O, no formatting.
//!
//! ## Generic Over RecordStore
//!
//! `CatalogApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::RecordStore;

pub use crate::commands::import::ImportSheet;
pub use crate::commands::{CmdMessage, CodeEntry, MessageLevel};

/// The main API facade for catalogue operations.
///
/// Loads the custom records exactly once, in [`CatalogApi::open`]; every
/// operation afterwards works on the live in-memory catalogue and flushes
/// through the store it owns.
pub struct CatalogApi<S: RecordStore> {
    store: S,
    catalog: Catalog,
    recovered: bool,
}

impl<S: RecordStore> CatalogApi<S> {
    pub fn open(store: S) -> Result<Self> {
        let (catalog, recovered) = Catalog::load(&store)?;
        Ok(Self {
            store,
            catalog,
            recovered,
        })
    }

    /// True when the stored document was corrupt and the catalogue started
    /// empty. The UI should warn; the next successful mutation overwrites
    /// the broken document.
    pub fn recovered_from_corruption(&self) -> bool {
        self.recovered
    }

    pub fn add_record(&mut self, code_raw: &str, draft: RecordDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, &mut self.store, code_raw, draft)
    }

    pub fn edit_record(&mut self, code_raw: &str, draft: RecordDraft) -> Result<CmdResult> {
        commands::edit::run(&mut self.catalog, &mut self.store, code_raw, draft)
    }

    pub fn delete_record(&mut self, code_raw: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.catalog, &mut self.store, code_raw)
    }

    pub fn get_record(&self, code_raw: &str) -> Result<CmdResult> {
        commands::get::run(&self.catalog, code_raw)
    }

    pub fn list_codes(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn import_sheet(&mut self, sheet: &ImportSheet) -> Result<CmdResult> {
        commands::import::run(&mut self.catalog, &mut self.store, sheet)
    }
}
