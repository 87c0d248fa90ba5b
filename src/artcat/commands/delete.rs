use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::store::RecordStore;
use crate::validate;

pub fn run<S: RecordStore>(
    catalog: &mut Catalog,
    store: &mut S,
    code_raw: &str,
) -> Result<CmdResult> {
    let code = validate::validate_code(code_raw)?;
    if catalog.is_default(&code) {
        return Err(CatalogError::Immutable(code.to_string()));
    }
    let removed = catalog
        .remove_custom(&code)
        .ok_or_else(|| CatalogError::NotFound(code.to_string()))?;

    if let Err(e) = store.save(catalog.custom()) {
        catalog.insert_custom(code, removed);
        return Err(e);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record deleted: {}", code)));
    Ok(result)
}
