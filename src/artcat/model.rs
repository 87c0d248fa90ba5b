use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validate;

/// An 11-digit record code, the catalogue's only key type.
///
/// Construct through [`Code::parse`] (or [`validate::validate_code`]); the
/// constructor is the single canonicalization point, so a `Code` held anywhere
/// in the system is already trimmed and digit-checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate::validate_code(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Only the validator builds codes; it has already checked the string.
    pub(crate) fn from_validated(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: String,
    pub width: String,
    pub size_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtDetails {
    pub media: String,
    pub year: String,
    pub series: String,
    #[serde(default)]
    pub secondary_series: String,
    pub dimensions: Dimensions,
}

/// The primary record shape: an image URL plus full art metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtRecord {
    pub url: String,
    #[serde(default)]
    pub name: String,
    pub details: ArtDetails,
}

/// Degenerate shape for reduced deployments: an image URL and a free-text blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleRecord {
    pub url: String,
    pub info: String,
}

/// A catalogue entry. Untagged on the wire: the two shapes are disambiguated
/// by their fields (`details` vs `info`), so stored documents stay plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Art(ArtRecord),
    Simple(SimpleRecord),
}

impl Record {
    pub fn url(&self) -> &str {
        match self {
            Record::Art(r) => &r.url,
            Record::Simple(r) => &r.url,
        }
    }
}

/// Raw, untrimmed field values for an art record, as they arrive from a form
/// or a spreadsheet row.
#[derive(Debug, Clone, Default)]
pub struct ArtDraft {
    pub url: String,
    pub name: String,
    pub media: String,
    pub year: String,
    pub series: String,
    pub secondary_series: String,
    pub length: String,
    pub width: String,
    pub size_category: String,
}

/// Unvalidated input for either record shape.
///
/// [`RecordDraft::finish`] is the one place raw input becomes a [`Record`]:
/// it trims every field, checks required fields in a fixed order, and
/// validates the year. Both the CRUD commands and the bulk importer go
/// through it.
#[derive(Debug, Clone)]
pub enum RecordDraft {
    Art(ArtDraft),
    Simple { url: String, info: String },
}

impl RecordDraft {
    pub fn finish(self) -> Result<Record, ValidationError> {
        match self {
            RecordDraft::Art(d) => {
                validate::validate_required(&[
                    ("url", &d.url),
                    ("media", &d.media),
                    ("year", &d.year),
                    ("series", &d.series),
                    ("length", &d.length),
                    ("width", &d.width),
                    ("size_category", &d.size_category),
                ])?;
                let year = validate::validate_year(&d.year)?;
                Ok(Record::Art(ArtRecord {
                    url: d.url.trim().to_string(),
                    name: d.name.trim().to_string(),
                    details: ArtDetails {
                        media: d.media.trim().to_string(),
                        year,
                        series: d.series.trim().to_string(),
                        secondary_series: d.secondary_series.trim().to_string(),
                        dimensions: Dimensions {
                            length: d.length.trim().to_string(),
                            width: d.width.trim().to_string(),
                            size_category: d.size_category.trim().to_string(),
                        },
                    },
                }))
            }
            RecordDraft::Simple { url, info } => {
                validate::validate_required(&[("url", &url), ("info", &info)])?;
                Ok(Record::Simple(SimpleRecord {
                    url: url.trim().to_string(),
                    info: info.trim().to_string(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art_draft() -> ArtDraft {
        ArtDraft {
            url: "http://x/img.png".into(),
            name: "Untitled".into(),
            media: "Oil".into(),
            year: "2020".into(),
            series: "A".into(),
            secondary_series: "".into(),
            length: "10".into(),
            width: "20".into(),
            size_category: "Small".into(),
        }
    }

    #[test]
    fn finish_trims_every_field() {
        let mut draft = art_draft();
        draft.media = "  Oil on Canvas  ".into();
        draft.name = " Dusk ".into();
        draft.length = " 10 ".into();

        let record = RecordDraft::Art(draft).finish().unwrap();
        match record {
            Record::Art(r) => {
                assert_eq!(r.name, "Dusk");
                assert_eq!(r.details.media, "Oil on Canvas");
                assert_eq!(r.details.dimensions.length, "10");
            }
            Record::Simple(_) => panic!("expected art record"),
        }
    }

    #[test]
    fn finish_reports_first_missing_field() {
        let mut draft = art_draft();
        draft.media = "   ".into();
        draft.series = "".into();

        let err = RecordDraft::Art(draft).finish().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("media".into()));
    }

    #[test]
    fn finish_rejects_bad_year() {
        let mut draft = art_draft();
        draft.year = "20x0".into();
        let err = RecordDraft::Art(draft).finish().unwrap_err();
        assert_eq!(err, ValidationError::InvalidYear);
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut draft = art_draft();
        draft.name = "".into();
        draft.secondary_series = "".into();
        assert!(RecordDraft::Art(draft).finish().is_ok());
    }

    #[test]
    fn simple_draft_requires_info() {
        let err = RecordDraft::Simple {
            url: "http://x".into(),
            info: "  ".into(),
        }
        .finish()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("info".into()));
    }

    #[test]
    fn record_json_roundtrip_preserves_empty_optionals() {
        let record = RecordDraft::Art(art_draft()).finish().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn untagged_shapes_disambiguate() {
        let simple = r#"{"url":"http://x","info":"a sketch"}"#;
        let parsed: Record = serde_json::from_str(simple).unwrap();
        assert!(matches!(parsed, Record::Simple(_)));
    }
}
