//! Filter configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Token delimiter must not be empty")]
    EmptyDelimiter,

    #[error("Blank token must not be empty")]
    EmptyBlankToken,

    #[error("Colour name must not be empty")]
    EmptyColourName,

    #[error("Colour name {name:?} contains the token delimiter {delimiter:?}")]
    DelimiterInColourName { name: String, delimiter: String },

    #[error("Colour name {0:?} collides with the blank token")]
    BlankColourName(String),

    #[error("{count} colours declared, at most {max} supported")]
    TooManyColours { count: usize, max: usize },

    #[error("Duplicate colour name {0:?}")]
    DuplicateColour(String),

    #[error("Invalid colour code {code:?} for {name:?} (expected 6 hex digits)")]
    InvalidColourCode { name: String, code: String },

    #[error("Failed to parse filter configuration: {0}")]
    Config(#[from] serde_json::Error),
}
