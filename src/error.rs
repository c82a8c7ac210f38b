use crate::calc::ValidationError;
use thiserror::Error;

/// Anything that stops a single calculation. Neither variant is fatal to
/// the process; both are shown to the user in place of the quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("예기치 않은 오류가 발생했습니다: {0}")]
    Unexpected(String),
}

impl QuoteError {
    pub(crate) fn overflow(what: &str) -> Self {
        QuoteError::Unexpected(format!("{what} overflowed"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::Validation(e) => e.code(),
            QuoteError::Unexpected(_) => "unexpected_error",
        }
    }
}
