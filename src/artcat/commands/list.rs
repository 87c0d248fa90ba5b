use crate::catalog::Catalog;
use crate::commands::{CmdResult, CodeEntry};
use crate::error::Result;

/// Every code in the catalogue view, defaults and custom, in code order.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let listed = catalog
        .all_codes()
        .into_iter()
        .map(|code| {
            let is_default = catalog.is_default(&code);
            CodeEntry { code, is_default }
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
