use artcat::model::{ArtDraft, RecordDraft};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artcat")]
#[command(about = "Artwork catalogue keyed by 11-digit codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the records document (overrides the configured location)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record under a new code
    #[command(alias = "a")]
    Add {
        /// 11-digit code for the record
        code: String,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Replace the record stored under a code
    #[command(alias = "e")]
    Edit {
        /// Code of an existing custom record
        code: String,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Delete a custom record
    #[command(alias = "rm")]
    Delete {
        /// Code of an existing custom record
        code: String,
    },

    /// Look a record up by code
    #[command(alias = "v")]
    Get {
        /// Code to resolve (default or custom)
        code: String,
    },

    /// List every code in the catalogue
    #[command(alias = "ls")]
    List,

    /// Bulk import records from a CSV file with a header row
    Import {
        /// CSV file: code,url,media,year,series,length,width,size_category
        /// (plus optional name, secondary_series), or code,url,info
        file: PathBuf,
    },
}

/// Record fields as CLI flags. Everything defaults to empty; the core
/// validators decide what is actually required, so error messages are the
/// same here as for any other frontend.
#[derive(Args, Debug, Default)]
pub struct RecordFields {
    /// Image URL
    #[arg(long, default_value = "")]
    pub url: String,

    /// Artwork name (optional)
    #[arg(long, default_value = "")]
    pub name: String,

    /// e.g. "Oil on Canvas"
    #[arg(long, default_value = "")]
    pub media: String,

    /// 4-digit year
    #[arg(long, default_value = "")]
    pub year: String,

    /// Primary series
    #[arg(long, default_value = "")]
    pub series: String,

    /// Secondary series (optional)
    #[arg(long, default_value = "")]
    pub secondary_series: String,

    /// Length in cm
    #[arg(long, default_value = "")]
    pub length: String,

    /// Width in cm
    #[arg(long, default_value = "")]
    pub width: String,

    /// Size category, e.g. Small, Medium, Large
    #[arg(long = "size", default_value = "")]
    pub size_category: String,

    /// Free-text blurb; selects the simple record shape instead of the
    /// art fields above
    #[arg(long)]
    pub info: Option<String>,
}

impl RecordFields {
    pub fn into_draft(self) -> RecordDraft {
        match self.info {
            Some(info) => RecordDraft::Simple {
                url: self.url,
                info,
            },
            None => RecordDraft::Art(ArtDraft {
                url: self.url,
                name: self.name,
                media: self.media,
                year: self.year,
                series: self.series,
                secondary_series: self.secondary_series,
                length: self.length,
                width: self.width,
                size_category: self.size_category,
            }),
        }
    }
}
