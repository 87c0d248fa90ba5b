use super::{LoadReport, RecordMap, RecordStore};
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole record map as pretty-printed JSON at a fixed
/// path. Saves write a sibling temp file and rename it over the document, so
/// a reader never observes a partial write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::default());
        }
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        match serde_json::from_str::<RecordMap>(&content) {
            Ok(records) => Ok(LoadReport {
                records,
                corrupt_discarded: false,
            }),
            // Unparseable document: start empty rather than crash. The caller
            // surfaces this; the old content is replaced on the next save.
            Err(_) => Ok(LoadReport {
                records: RecordMap::new(),
                corrupt_discarded: true,
            }),
        }
    }

    fn save(&mut self, records: &RecordMap) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(CatalogError::Serialization)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(CatalogError::Io)?;
        fs::rename(&tmp, &self.path).map_err(CatalogError::Io)?;
        Ok(())
    }
}
