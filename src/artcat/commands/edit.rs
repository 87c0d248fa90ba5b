use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::RecordDraft;
use crate::store::RecordStore;
use crate::validate;

/// Replace a custom record wholesale. There is no partial-field merge: the
/// draft must stand on its own. Default records are immutable.
pub fn run<S: RecordStore>(
    catalog: &mut Catalog,
    store: &mut S,
    code_raw: &str,
    draft: RecordDraft,
) -> Result<CmdResult> {
    let code = validate::validate_code(code_raw)?;
    if catalog.is_default(&code) {
        return Err(CatalogError::Immutable(code.to_string()));
    }
    if !catalog.custom().contains_key(&code) {
        return Err(CatalogError::NotFound(code.to_string()));
    }
    let record = draft.finish()?;

    let previous = catalog.replace_custom(code.clone(), record.clone());
    if let Err(e) = store.save(catalog.custom()) {
        // Put the old record back; previous is Some by the guard above
        if let Some(old) = previous {
            catalog.replace_custom(code, old);
        }
        return Err(e);
    }

    let mut result = CmdResult::default().with_records(vec![(code.clone(), record)]);
    result.add_message(CmdMessage::success(format!("Record updated: {}", code)));
    Ok(result)
}
