/// Error types for the snippet sidebar

use thiserror::Error;

/// Failures of the host storage or clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to convert snippets: {0}")]
    Serialization(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Why a requested mutation was not applied.
/// These are logged and never reported to the caller as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("Snippet input is empty")]
    EmptySnippet,

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Ungrouped snippets can only be deleted individually")]
    UngroupedGroup,

    #[error("No snippet at index {index} in group {group} ({len} snippets)")]
    IndexOutOfRange {
        group: String,
        index: usize,
        len: usize,
    },
}

pub type SnippetResult<T> = Result<T, SnippetError>;
