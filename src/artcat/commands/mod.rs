use crate::model::{Code, Record};

pub mod add;
pub mod delete;
pub mod edit;
pub mod get;
pub mod import;
pub mod list;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One line of a catalogue listing.
#[derive(Debug, Clone)]
pub struct CodeEntry {
    pub code: Code,
    pub is_default: bool,
}

/// Structured outcome of a command, for the presentation layer to render.
/// Commands never format for a terminal; they fill in the fields that apply
/// and leave the rest empty.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records the command touched or fetched, with their codes.
    pub records: Vec<(Code, Record)>,
    /// Catalogue listing, for `list`.
    pub listed: Vec<CodeEntry>,
    /// Aggregate report, for `import`.
    pub import: Option<import::ImportReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<(Code, Record)>) -> Self {
        self.records = records;
        self
    }

    pub fn with_listed(mut self, listed: Vec<CodeEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_import(mut self, report: import::ImportReport) -> Self {
        self.import = Some(report);
        self
    }
}
