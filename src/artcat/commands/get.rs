use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::validate;

/// Look a record up across the whole catalogue view. Read-only.
pub fn run(catalog: &Catalog, code_raw: &str) -> Result<CmdResult> {
    let code = validate::validate_code(code_raw)?;
    let record = catalog
        .resolve(&code)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(code.to_string()))?;
    Ok(CmdResult::default().with_records(vec![(code, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults;
    use crate::commands::{add, delete};
    use crate::model::{ArtDraft, RecordDraft};
    use crate::store::memory::InMemoryStore;
    use crate::store::RecordMap;

    fn draft() -> RecordDraft {
        RecordDraft::Art(ArtDraft {
            url: "http://x/img.png".into(),
            media: "Oil".into(),
            year: "2020".into(),
            series: "A".into(),
            length: "10".into(),
            width: "20".into(),
            size_category: "Small".into(),
            ..Default::default()
        })
    }

    #[test]
    fn finds_defaults_and_custom_records() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());
        add::run(&mut catalog, &mut store, "12345678901", draft()).unwrap();

        assert_eq!(run(&catalog, "12345678901").unwrap().records.len(), 1);

        let default_code = defaults::default_records().keys().next().unwrap();
        assert_eq!(run(&catalog, default_code.as_str()).unwrap().records.len(), 1);
    }

    #[test]
    fn deleted_record_is_not_found() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());
        add::run(&mut catalog, &mut store, "12345678901", draft()).unwrap();
        delete::run(&mut catalog, &mut store, "12345678901").unwrap();

        let err = run(&catalog, "12345678901").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn invalid_code_is_a_validation_error() {
        let catalog = Catalog::with_custom(RecordMap::new());
        let err = run(&catalog, "nope").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
