use thiserror::Error;

/// Pipeline-level failures of a statement ingestion.
///
/// Any of these aborts the whole upload and leaves the report history
/// unchanged. Per-row coercion problems never surface here; they degrade
/// the affected cells to defaults instead, so messy sheets still import.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// The source decoded to zero data rows, before any filtering.
    #[error("The uploaded statement contains no data rows")]
    EmptyInput,

    /// Rows existed but every one was dropped for missing agent or name
    /// fields (subtotal/footer rows and similar).
    #[error("No usable rows in the uploaded statement: {dropped} rows were missing agent or name fields")]
    NoUsableRows { dropped: usize },

    /// The raw source could not be decoded as a statement sheet at all.
    #[error("Statement source is unreadable: {0}")]
    SourceUnreadable(String),
}
