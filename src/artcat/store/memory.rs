use super::{LoadReport, RecordMap, RecordStore};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: RecordMap,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: RecordMap) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &RecordMap {
        &self.records
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        Ok(LoadReport {
            records: self.records.clone(),
            corrupt_discarded: false,
        })
    }

    fn save(&mut self, records: &RecordMap) -> Result<()> {
        self.records = records.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::CatalogError;

    /// An `InMemoryStore` wrapper that counts saves and can be told to fail
    /// the next one, for exercising single-flush and rollback behavior.
    #[derive(Default)]
    pub struct InstrumentedStore {
        pub inner: InMemoryStore,
        pub saves: usize,
        pub fail_next_save: bool,
    }

    impl InstrumentedStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl RecordStore for InstrumentedStore {
        fn load(&self) -> Result<LoadReport> {
            self.inner.load()
        }

        fn save(&mut self, records: &RecordMap) -> Result<()> {
            if self.fail_next_save {
                self.fail_next_save = false;
                return Err(CatalogError::Io(std::io::Error::other("disk full")));
            }
            self.saves += 1;
            self.inner.save(records)
        }
    }
}
