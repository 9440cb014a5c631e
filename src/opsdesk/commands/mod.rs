use crate::backend::{ImportReport, KpiReport};
use std::path::PathBuf;

pub mod assign;
pub mod backup;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod report;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One user-facing notification. Every operation concludes with exactly one
/// terminal Success or Error message; Info/Warning entries may precede it.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Structured result of one operation. `R` is the module's record type;
/// operations without a record payload use `CmdResult<()>`.
#[derive(Debug)]
pub struct CmdResult<R> {
    pub affected: Vec<R>,
    pub listed: Vec<R>,
    pub report: Option<KpiReport>,
    pub import: Option<ImportReport>,
    pub artifact: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            report: None,
            import: None,
            artifact: None,
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<R>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_report(mut self, report: KpiReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_import(mut self, import: ImportReport) -> Self {
        self.import = Some(import);
        self
    }

    pub fn with_artifact(mut self, path: PathBuf) -> Self {
        self.artifact = Some(path);
        self
    }
}
