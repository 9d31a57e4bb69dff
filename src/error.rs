//! Typed errors for the configuration layer. Descriptor construction and fragment generation never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(#[from] serde_json::Error),
    #[error("invalid {kind} template on '{attribute}': {template:?} has {found} '%s' slot(s), expected {expected}")]
    InvalidTemplate {
        kind: &'static str,
        attribute: String,
        template: String,
        found: usize,
        expected: &'static str,
    },
    #[error("duplicate attribute: table {table} attribute {attribute}")]
    DuplicateAttribute { table: String, attribute: String },
    #[error("validation: {0}")]
    Validation(String),
}
