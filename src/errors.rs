use thiserror::Error;

use crate::types::LoanField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: LoanField,
        reason: String,
    },

    #[error("numeric overflow while computing {context}")]
    NumericOverflow {
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl LoanError {
    pub(crate) fn invalid(field: LoanField, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        LoanError::NumericOverflow {
            context: context.into(),
        }
    }

    /// input field that failed validation, if any
    pub fn field(&self) -> Option<LoanField> {
        match self {
            LoanError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoanError {
    fn from(e: serde_json::Error) -> Self {
        LoanError::InvalidConfiguration {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
