use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::RecordDraft;
use crate::store::RecordStore;
use crate::validate;

/// Add a new custom record. The code must not collide with anything in the
/// catalogue view, defaults included. On success the full custom map is
/// flushed; a failed flush rolls the insertion back.
pub fn run<S: RecordStore>(
    catalog: &mut Catalog,
    store: &mut S,
    code_raw: &str,
    draft: RecordDraft,
) -> Result<CmdResult> {
    let code = validate::validate_code(code_raw)?;
    if catalog.contains(&code) {
        return Err(CatalogError::DuplicateCode(code.to_string()));
    }
    let record = draft.finish()?;

    catalog.insert_custom(code.clone(), record.clone());
    if let Err(e) = store.save(catalog.custom()) {
        catalog.remove_custom(&code);
        return Err(e);
    }

    let mut result = CmdResult::default().with_records(vec![(code.clone(), record)]);
    result.add_message(CmdMessage::success(format!("Record added: {}", code)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults;
    use crate::error::ValidationError;
    use crate::model::ArtDraft;
    use crate::store::memory::fixtures::InstrumentedStore;
    use crate::store::memory::InMemoryStore;
    use crate::store::RecordMap;

    fn valid_draft() -> RecordDraft {
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
    fn adds_and_persists() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let result = run(&mut catalog, &mut store, "12345678901", valid_draft()).unwrap();
        assert_eq!(result.records.len(), 1);

        let code = &result.records[0].0;
        assert!(catalog.resolve(code).is_some());
        // Persisted copy matches the live one
        assert_eq!(store.records(), catalog.custom());
    }

    #[test]
    fn rejects_invalid_code() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let err = run(&mut catalog, &mut store, "123", valid_draft()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::InvalidLength)
        ));
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn rejects_duplicate_custom_code() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        run(&mut catalog, &mut store, "12345678901", valid_draft()).unwrap();
        let err = run(&mut catalog, &mut store, "12345678901", valid_draft()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(_)));
    }

    #[test]
    fn rejects_default_code_as_duplicate() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());
        let default_code = defaults::default_records().keys().next().unwrap().clone();

        let err = run(
            &mut catalog,
            &mut store,
            default_code.as_str(),
            valid_draft(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(_)));
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn rejects_incomplete_record_without_state_change() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let draft = RecordDraft::Art(ArtDraft {
            url: "http://x/img.png".into(),
            ..Default::default()
        });
        let err = run(&mut catalog, &mut store, "12345678901", draft).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(catalog.custom().is_empty());
        assert!(store.records().is_empty());
    }

    #[test]
    fn failed_save_rolls_back_the_insert() {
        let mut store = InstrumentedStore::new();
        store.fail_next_save = true;
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let err = run(&mut catalog, &mut store, "12345678901", valid_draft()).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        // Memory and disk agree: neither has the record
        assert!(catalog.custom().is_empty());
        assert!(store.inner.records().is_empty());
    }
}
