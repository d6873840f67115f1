//! HTTP client for the remote loan-calculation service
//!
//! One JSON `POST` per calculation. A success body carries the monthly
//! payment; a non-success status may carry per-field rejection messages
//! keyed like the request fields.

use crate::validate::{FieldErrors, LoanField, ValidatedLoan};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{LoanService, ServiceError};

/// Request body for the calculation endpoint
#[derive(Debug, Serialize, PartialEq)]
pub struct QuoteRequest {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub loan_term: u32,
}

impl From<ValidatedLoan> for QuoteRequest {
    fn from(loan: ValidatedLoan) -> Self {
        Self {
            loan_amount: loan.amount,
            interest_rate: loan.rate,
            loan_term: loan.term_months,
        }
    }
}

/// Success body from the calculation endpoint
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub monthly_payment: f64,
}

/// Client for the loan-calculation HTTP endpoint
pub struct HttpLoanClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpLoanClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LoanService for HttpLoanClient {
    async fn calculate(&self, loan: ValidatedLoan) -> Result<f64, ServiceError> {
        let request = QuoteRequest::from(loan);
        tracing::debug!(endpoint = %self.endpoint, ?request, "submitting loan calculation");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let quote: QuoteResponse = response
                .json()
                .await
                .map_err(|e| ServiceError::Transport(format!("malformed success body: {e}")))?;
            Ok(quote.monthly_payment)
        } else {
            let body: Value = response.json().await.map_err(|e| {
                ServiceError::Transport(format!("unreadable rejection body ({status}): {e}"))
            })?;
            Err(ServiceError::Rejected(rejection_errors(&body)))
        }
    }
}

/// Map a rejection body onto field errors.
/// Only the three known wire keys are considered; anything else is ignored.
fn rejection_errors(body: &Value) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in LoanField::ALL {
        if let Some(message) = body.get(field.wire_key()).and_then(Value::as_str) {
            errors.set(field, message);
        }
    }
    errors
}
