//! Error types for protannot

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for protannot operations
pub type Result<T> = std::result::Result<T, AnnotError>;

/// Error types that can occur while building and annotating a genome.
///
/// Every variant is fatal to the operation in progress. Annotations applied
/// before the failure are kept; nothing is rolled back.
#[derive(Debug, Error)]
pub enum AnnotError {
    /// Protein header does not follow the gene-caller grammar
    #[error("Error parsing genome proteins ({msg}). Was the output from prodigal?")]
    Format {
        /// What did not match
        msg: String,
    },

    /// A field of a search result file could not be interpreted
    #[error("Invalid field '{field}' in {path:?} at line {line}: {reason}")]
    Parse {
        /// Source file, if known
        path:   Option<PathBuf>,
        /// Line number (1-based) where the error occurred
        line:   usize,
        /// Field name
        field:  &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Unknown or unsupported annotation type
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Search hit refers to a protein absent from the genome
    #[error("Sequence '{0}' is not present in the genome")]
    UnknownSequence(String),

    /// Annotation region reaches past the end of its sequence
    #[error("Region {start}..{end} is outside of sequence '{seq_id}' (length {length})")]
    RegionOutOfBounds {
        /// Protein id
        seq_id: String,
        /// Region start
        start:  u32,
        /// Region end (exclusive)
        end:    u32,
        /// Sequence length
        length: u32,
    },

    /// Queried position is outside of the sequence
    #[error("Position {position} is outside of sequence '{seq_id}' (length {length})")]
    PositionOutOfBounds {
        /// Protein id
        seq_id:   String,
        /// Requested position
        position: usize,
        /// Sequence length
        length:   u32,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnnotError {
    pub(crate) fn format<S: Into<String>>(msg: S) -> Self {
        AnnotError::Format { msg: msg.into() }
    }

    /// Attaches the file path to a [`AnnotError::Parse`] produced by a
    /// reader that only knew the line number.
    pub(crate) fn with_path(
        self,
        source: &std::path::Path,
    ) -> Self {
        match self {
            AnnotError::Parse {
                path: None,
                line,
                field,
                reason,
            } => {
                AnnotError::Parse {
                    path: Some(source.to_path_buf()),
                    line,
                    field,
                    reason,
                }
            },
            other => other,
        }
    }
}
