//! Bulk import: validate and merge a whole sheet of candidate records in one
//! operation, with per-row outcomes and a single flush at the end.
//!
//! The importer is format-agnostic: it takes an [`ImportSheet`] of opaque
//! string cells, already split into a header and rows. The CLI builds one
//! from a CSV file; any other tabular source works the same way.
//!
//! Rows are processed in order against the **live** custom map, so a row
//! added earlier in the batch blocks a later row with the same code. One
//! sheet therefore can never claim a code twice, and the whole batch costs
//! exactly one store write.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result, ValidationError};
use crate::model::{ArtDraft, Code, RecordDraft};
use crate::store::RecordStore;
use crate::validate;
use std::collections::HashMap;
use std::fmt;

/// Spreadsheet row 1 is the header, so data row index 0 displays as row 2.
pub const HEADER_ROW_OFFSET: usize = 2;

const ART_COLUMNS: &[&str] = &[
    "code",
    "url",
    "media",
    "year",
    "series",
    "length",
    "width",
    "size_category",
];
const SIMPLE_COLUMNS: &[&str] = &["code", "url", "info"];

/// One data row: column name to raw cell value. A cell the source left blank
/// may be absent entirely; the importer treats both the same.
pub type ImportRow = HashMap<String, String>;

/// A parsed tabular document: the header columns (exact, case-sensitive
/// names) and the data rows in input order.
#[derive(Debug, Clone, Default)]
pub struct ImportSheet {
    pub columns: Vec<String>,
    pub rows: Vec<ImportRow>,
}

impl ImportSheet {
    pub fn new(columns: Vec<String>, rows: Vec<ImportRow>) -> Self {
        Self { columns, rows }
    }

    fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

/// Why a row was skipped. Stable discriminants; the presentation layer turns
/// these into user-facing messages via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcomeKind {
    InvalidCode,
    MissingUrl,
    InvalidYear,
    MissingField(String),
    Duplicate(Code),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// Display row number (1-based, header included).
    pub row: usize,
    pub kind: RowOutcomeKind,
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowOutcomeKind::InvalidCode => {
                write!(f, "Row {}: Invalid code (must be 11 digits)", self.row)
            }
            RowOutcomeKind::MissingUrl => write!(f, "Row {}: Missing URL", self.row),
            RowOutcomeKind::InvalidYear => write!(f, "Row {}: Year must be 4 digits", self.row),
            RowOutcomeKind::MissingField(name) => {
                write!(f, "Row {}: Missing {}", self.row, name)
            }
            RowOutcomeKind::Duplicate(_) => write!(f, "Row {}: Code exists - skipped", self.row),
        }
    }
}

/// Aggregate result of one import batch.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
    /// One entry per skipped row, in row order.
    pub outcomes: Vec<RowOutcome>,
}

#[derive(Clone, Copy)]
enum SheetShape {
    Art,
    Simple,
}

pub fn run<S: RecordStore>(
    catalog: &mut Catalog,
    store: &mut S,
    sheet: &ImportSheet,
) -> Result<CmdResult> {
    // A sheet with an `info` column imports simple records; anything else
    // must carry the full art column set.
    let (shape, required) = if sheet.has_column("info") {
        (SheetShape::Simple, SIMPLE_COLUMNS)
    } else {
        (SheetShape::Art, ART_COLUMNS)
    };

    // Schema errors abort the whole batch before any row is touched.
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !sheet.has_column(name))
        .collect();
    if !missing.is_empty() {
        return Err(CatalogError::MissingColumns(missing.join(", ")));
    }

    let mut report = ImportReport::default();
    let mut batch_codes: Vec<Code> = Vec::new();

    for (idx, row) in sheet.rows.iter().enumerate() {
        let display_row = idx + HEADER_ROW_OFFSET;
        let cell = |name: &str| row.get(name).map(String::as_str).unwrap_or("");
        let skip = |report: &mut ImportReport, kind: RowOutcomeKind| {
            report.skipped += 1;
            report.outcomes.push(RowOutcome {
                row: display_row,
                kind,
            });
        };

        let code = match validate::validate_code(cell("code")) {
            Ok(code) => code,
            Err(_) => {
                skip(&mut report, RowOutcomeKind::InvalidCode);
                continue;
            }
        };
        if cell("url").trim().is_empty() {
            skip(&mut report, RowOutcomeKind::MissingUrl);
            continue;
        }
        if matches!(shape, SheetShape::Art) && validate::validate_year(cell("year")).is_err() {
            skip(&mut report, RowOutcomeKind::InvalidYear);
            continue;
        }

        // Checked against the live map: defaults, pre-existing custom records,
        // and rows added earlier in this same batch all count.
        if catalog.contains(&code) {
            skip(&mut report, RowOutcomeKind::Duplicate(code));
            continue;
        }

        let draft = match shape {
            SheetShape::Art => RecordDraft::Art(ArtDraft {
                url: cell("url").to_string(),
                name: cell("name").to_string(),
                media: cell("media").to_string(),
                year: cell("year").to_string(),
                series: cell("series").to_string(),
                secondary_series: cell("secondary_series").to_string(),
                length: cell("length").to_string(),
                width: cell("width").to_string(),
                size_category: cell("size_category").to_string(),
            }),
            SheetShape::Simple => RecordDraft::Simple {
                url: cell("url").to_string(),
                info: cell("info").to_string(),
            },
        };
        let record = match draft.finish() {
            Ok(record) => record,
            Err(ValidationError::MissingField(name)) => {
                skip(&mut report, RowOutcomeKind::MissingField(name));
                continue;
            }
            Err(ValidationError::InvalidYear) => {
                skip(&mut report, RowOutcomeKind::InvalidYear);
                continue;
            }
            // Code errors can't come out of a draft
            Err(_) => {
                skip(&mut report, RowOutcomeKind::InvalidCode);
                continue;
            }
        };

        catalog.insert_custom(code.clone(), record);
        batch_codes.push(code);
        report.added += 1;
    }

    // One flush for the whole batch. If it fails, the batch never happened.
    if let Err(e) = store.save(catalog.custom()) {
        for code in &batch_codes {
            catalog.remove_custom(code);
        }
        return Err(e);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bulk upload complete. Added {} codes; skipped {} rows.",
        report.added, report.skipped
    )));
    Ok(result.with_import(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults;
    use crate::store::memory::fixtures::InstrumentedStore;
    use crate::store::memory::InMemoryStore;
    use crate::store::RecordMap;

    const ART_HEADER: &[&str] = &[
        "code",
        "url",
        "media",
        "year",
        "series",
        "length",
        "width",
        "size_category",
    ];

    fn sheet(columns: &[&str], rows: &[&[&str]]) -> ImportSheet {
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|cells| {
                columns
                    .iter()
                    .cloned()
                    .zip(cells.iter().map(|c| c.to_string()))
                    .collect()
            })
            .collect();
        ImportSheet::new(columns, rows)
    }

    fn art_row(code: &str) -> Vec<String> {
        vec![
            code.to_string(),
            "http://x/img.png".into(),
            "Oil".into(),
            "2020".into(),
            "A".into(),
            "10".into(),
            "20".into(),
            "Small".into(),
        ]
    }

    fn art_sheet(codes: &[&str]) -> ImportSheet {
        let rows: Vec<Vec<String>> = codes.iter().map(|c| art_row(c)).collect();
        let row_refs: Vec<Vec<&str>> = rows
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect();
        let refs: Vec<&[&str]> = row_refs.iter().map(|r| r.as_slice()).collect();
        sheet(ART_HEADER, &refs)
    }

    #[test]
    fn imports_valid_rows() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let result = run(
            &mut catalog,
            &mut store,
            &art_sheet(&["12345678901", "12345678902"]),
        )
        .unwrap();
        let report = result.import.unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(catalog.custom().len(), 2);
        assert_eq!(store.records(), catalog.custom());
    }

    #[test]
    fn missing_required_column_aborts_whole_batch() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        // No url column
        let bad = sheet(
            &["code", "media", "year", "series", "length", "width", "size_category"],
            &[&["12345678901", "Oil", "2020", "A", "10", "20", "Small"]],
        );
        let err = run(&mut catalog, &mut store, &bad).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumns(ref cols) if cols.contains("url")));
        assert!(catalog.custom().is_empty());
        assert!(store.records().is_empty());
    }

    #[test]
    fn intra_batch_duplicate_keeps_the_first_row() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let result = run(
            &mut catalog,
            &mut store,
            &art_sheet(&["12345678901", "12345678901", "12345678902"]),
        )
        .unwrap();
        let report = result.import.unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.outcomes.len(), 1);
        // Second data row is spreadsheet row 3
        assert_eq!(report.outcomes[0].row, 3);
        assert!(matches!(report.outcomes[0].kind, RowOutcomeKind::Duplicate(_)));
    }

    #[test]
    fn default_codes_are_duplicates_too() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());
        let default_code = defaults::default_records().keys().next().unwrap().clone();

        let result = run(
            &mut catalog,
            &mut store,
            &art_sheet(&[default_code.as_str()]),
        )
        .unwrap();
        let report = result.import.unwrap();
        assert_eq!(report.added, 0);
        assert_eq!(report.skipped, 1);
        // The default record is untouched
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn bad_rows_are_skipped_without_stopping_the_batch() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let mixed = sheet(
            ART_HEADER,
            &[
                &["123", "http://x", "Oil", "2020", "A", "10", "20", "Small"],
                &["12345678901", "", "Oil", "2020", "A", "10", "20", "Small"],
                &["12345678902", "http://x", "Oil", "20", "A", "10", "20", "Small"],
                &["12345678903", "http://x", "Oil", "2020", "A", "10", "20", "Small"],
            ],
        );
        let result = run(&mut catalog, &mut store, &mixed).unwrap();
        let report = result.import.unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 3);
        assert_eq!(
            report
                .outcomes
                .iter()
                .map(|o| o.kind.clone())
                .collect::<Vec<_>>(),
            vec![
                RowOutcomeKind::InvalidCode,
                RowOutcomeKind::MissingUrl,
                RowOutcomeKind::InvalidYear,
            ]
        );
        // First data row displays as row 2
        assert_eq!(report.outcomes[0].row, 2);
    }

    #[test]
    fn rows_missing_other_required_cells_are_skipped() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let missing_media = sheet(
            ART_HEADER,
            &[&["12345678901", "http://x", "  ", "2020", "A", "10", "20", "Small"]],
        );
        let result = run(&mut catalog, &mut store, &missing_media).unwrap();
        let report = result.import.unwrap();
        assert_eq!(report.added, 0);
        assert_eq!(
            report.outcomes[0].kind,
            RowOutcomeKind::MissingField("media".into())
        );
    }

    #[test]
    fn whole_batch_is_one_save() {
        let mut store = InstrumentedStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        run(
            &mut catalog,
            &mut store,
            &art_sheet(&["12345678901", "12345678902", "12345678903"]),
        )
        .unwrap();
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn failed_save_rolls_back_every_batch_row() {
        let mut store = InstrumentedStore::new();
        store.fail_next_save = true;
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let err = run(
            &mut catalog,
            &mut store,
            &art_sheet(&["12345678901", "12345678902"]),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn info_column_imports_simple_records() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let simple = sheet(
            &["code", "url", "info"],
            &[&["12345678901", "http://x", "a sketch"]],
        );
        let result = run(&mut catalog, &mut store, &simple).unwrap();
        assert_eq!(result.import.unwrap().added, 1);

        let code = crate::validate::validate_code("12345678901").unwrap();
        assert!(matches!(
            catalog.resolve(&code),
            Some(crate::model::Record::Simple(_))
        ));
    }

    #[test]
    fn cells_are_trimmed_on_import() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::with_custom(RecordMap::new());

        let padded = sheet(
            ART_HEADER,
            &[&[
                " 12345678901 ",
                " http://x/img.png ",
                " Oil ",
                " 2020 ",
                " A ",
                "10",
                "20",
                "Small",
            ]],
        );
        run(&mut catalog, &mut store, &padded).unwrap();

        let code = crate::validate::validate_code("12345678901").unwrap();
        match catalog.resolve(&code).unwrap() {
            crate::model::Record::Art(r) => {
                assert_eq!(r.url, "http://x/img.png");
                assert_eq!(r.details.media, "Oil");
                assert_eq!(r.details.year, "2020");
            }
            crate::model::Record::Simple(_) => panic!("expected art record"),
        }
    }
}
