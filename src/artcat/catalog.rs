//! # Catalogue Namespace
//!
//! One lookup surface over two record sets: the compiled-in defaults (see
//! [`defaults`]) and the persisted custom records. Defaults are checked first
//! on resolve and win every membership question; the CRUD commands use
//! [`Catalog::is_default`] to refuse edits and deletes of default codes, and
//! [`Catalog::contains`] to refuse inserts that would collide with either set.
//! Nothing is ever shadowed: a code resolves to exactly one record.
//!
//! The store is read exactly once, in [`Catalog::load`]. After that the
//! custom map held here is the live copy; resolve/contains/all_codes are pure
//! reads over it and never go back to disk.

use crate::error::Result;
use crate::model::{Code, Record};
use crate::store::{RecordMap, RecordStore};
use std::collections::BTreeSet;

pub mod defaults;

pub struct Catalog {
    defaults: &'static RecordMap,
    custom: RecordMap,
}

impl Catalog {
    /// Load the custom records from the store and merge them under the
    /// built-in defaults. The returned flag is true when the stored document
    /// was corrupt and discarded (the catalogue then starts empty).
    pub fn load<S: RecordStore>(store: &S) -> Result<(Self, bool)> {
        let report = store.load()?;
        Ok((
            Self {
                defaults: defaults::default_records(),
                custom: report.records,
            },
            report.corrupt_discarded,
        ))
    }

    /// A catalogue with the built-in defaults and the given custom records,
    /// bypassing any store. Useful for tests and one-shot tools.
    pub fn with_custom(custom: RecordMap) -> Self {
        Self {
            defaults: defaults::default_records(),
            custom,
        }
    }

    pub fn resolve(&self, code: &Code) -> Option<&Record> {
        self.defaults.get(code).or_else(|| self.custom.get(code))
    }

    pub fn is_default(&self, code: &Code) -> bool {
        self.defaults.contains_key(code)
    }

    /// Membership across both sets; `add` rejects any code this returns true for.
    pub fn contains(&self, code: &Code) -> bool {
        self.defaults.contains_key(code) || self.custom.contains_key(code)
    }

    pub fn all_codes(&self) -> BTreeSet<Code> {
        self.defaults
            .keys()
            .chain(self.custom.keys())
            .cloned()
            .collect()
    }

    /// The persisted set, exactly what `save` should write.
    pub fn custom(&self) -> &RecordMap {
        &self.custom
    }

    pub(crate) fn insert_custom(&mut self, code: Code, record: Record) {
        self.custom.insert(code, record);
    }

    pub(crate) fn replace_custom(&mut self, code: Code, record: Record) -> Option<Record> {
        self.custom.insert(code, record)
    }

    pub(crate) fn remove_custom(&mut self, code: &Code) -> Option<Record> {
        self.custom.remove(code)
    }
}
