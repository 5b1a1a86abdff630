use crate::modal::ModalContext;
use chrono::NaiveDate;
use serde::Serialize;

const FILE_SUFFIX: &str = "-reflection.pdf";
const FALLBACK_STEM: &str = "strategy";

/// Everything the document generator receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub title: String,
    pub notes: String,
    pub date: String,
}

impl ExportRequest {
    #[must_use]
    pub fn new(title: impl Into<String>, notes: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            notes: notes.into(),
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    #[must_use]
    pub fn from_context(ctx: &ModalContext, date: NaiveDate) -> Self {
        Self::new(ctx.title(), ctx.note.clone(), date)
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        export_file_name(&self.title)
    }
}

/// Deterministic download name: lowercase ASCII words joined by `-`.
#[must_use]
pub fn export_file_name(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    format!("{stem}{FILE_SUFFIX}")
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Document generator unavailable: {0}")]
    Unavailable(String),
    #[error("Document generation failed: {0}")]
    Failed(String),
}

/// The external collaborator that turns a request into a downloadable document.
pub trait Exporter {
    /// Produce the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator is missing or fails.
    fn export(&self, request: &ExportRequest) -> Result<(), ExportError>;
}
