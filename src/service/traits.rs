//! Trait abstraction for the loan service to enable mocking in tests

use crate::validate::{FieldErrors, ValidatedLoan};
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a calculation call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The call completed but the service refused the request,
    /// possibly with per-field detail
    #[error("loan service rejected the request")]
    Rejected(FieldErrors),

    /// The call could not complete or the response could not be interpreted
    #[error("loan service unreachable: {0}")]
    Transport(String),
}

/// Trait for loan service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanService: Send + Sync {
    /// Request the monthly payment for a validated loan.
    /// Exactly one outbound call per invocation; no retry, no timeout.
    async fn calculate(&self, loan: ValidatedLoan) -> Result<f64, ServiceError>;
}
