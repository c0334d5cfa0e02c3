use crate::keyword::KeywordId;
use thiserror::Error;

/// Errors that can occur when reading keyword arguments
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A value was required but none was ever bound
    #[error("Missing parameter '{keyword}'")]
    Missing { keyword: KeywordId },

    /// The requested type doesn't match the type that was bound
    #[error("Wrong type for parameter '{keyword}': expected {expected}, found {found}")]
    WrongType {
        keyword: KeywordId,
        expected: &'static str,
        found: &'static str,
    },

    /// The parameter was invalidated before being read
    #[error("Invalid parameter '{keyword}': {reasons}")]
    Invalid { keyword: KeywordId, reasons: String },

    /// One or more keywords were bound more than once in the same set
    #[error("Multiple values for parameters: {}", join_keywords(.keywords))]
    Multiple { keywords: Vec<KeywordId> },
}

fn join_keywords(keywords: &[KeywordId]) -> String {
    keywords
        .iter()
        .map(KeywordId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ParamError {
    /// Check if this error means no value was bound
    pub fn is_missing(&self) -> bool {
        matches!(self, ParamError::Missing { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ParamError::WrongType { .. })
    }

    /// Check if this error comes from an invalidated parameter
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParamError::Invalid { .. })
    }

    /// Check if this error reports duplicate bindings
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ParamError::Multiple { .. })
    }

    /// The single keyword this error is about, if there is exactly one
    pub fn keyword(&self) -> Option<&KeywordId> {
        match self {
            ParamError::Missing { keyword }
            | ParamError::WrongType { keyword, .. }
            | ParamError::Invalid { keyword, .. } => Some(keyword),
            ParamError::Multiple { .. } => None,
        }
    }
}
