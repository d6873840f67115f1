//! Submission coordination: validate, call the service once, map the outcome

use crate::service::{LoanService, ServiceError};
use crate::state::LoanForm;
use crate::validate::{validate, FieldErrors};

/// Message shown for any failure to obtain or interpret a response.
/// The underlying cause is logged, never displayed.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to calculate loan payment. Please try again.";

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service returned a monthly payment, taken verbatim
    Payment(f64),
    /// Local validation or the service rejected the request per field
    Invalid(FieldErrors),
    /// The request could not be completed; a generic retry message
    Failed(String),
}

/// Run one submission attempt: re-validate the whole form, and if it passes
/// issue exactly one call to the service.
///
/// A rejection that carries none of the known field keys is reported as a
/// failure rather than an empty error set, which would otherwise render as
/// a silent non-result.
pub async fn submit(form: &LoanForm, service: &dyn LoanService) -> SubmitOutcome {
    let loan = match validate(form) {
        Ok(loan) => loan,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match service.calculate(loan).await {
        Ok(monthly_payment) => SubmitOutcome::Payment(monthly_payment),
        Err(ServiceError::Rejected(errors)) if errors.is_empty() => {
            tracing::warn!("loan service rejected the request without field detail");
            SubmitOutcome::Failed(TRANSPORT_FAILURE_MESSAGE.to_string())
        }
        Err(ServiceError::Rejected(errors)) => SubmitOutcome::Invalid(errors),
        Err(ServiceError::Transport(cause)) => {
            tracing::error!(%cause, "loan calculation failed");
            SubmitOutcome::Failed(TRANSPORT_FAILURE_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockLoanService;
    use crate::validate::{LoanField, ValidatedLoan};
    use pretty_assertions::assert_eq;

    fn filled_form() -> LoanForm {
        let mut form = LoanForm::new();
        form.loan_amount.set_text("10000");
        form.interest_rate.set_text("5");
        form.loan_term.set_text("60");
        form
    }

    #[tokio::test]
    async fn test_success_returns_payment_verbatim() {
        let mut service = MockLoanService::new();
        service
            .expect_calculate()
            .withf(|loan| {
                *loan
                    == ValidatedLoan {
                        amount: 10000.0,
                        rate: 5.0,
                        term_months: 60,
                    }
            })
            .times(1)
            .returning(|_| Ok(188.71));

        let outcome = submit(&filled_form(), &service).await;
        assert_eq!(outcome, SubmitOutcome::Payment(188.71));
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_call() {
        let mut service = MockLoanService::new();
        service.expect_calculate().times(0);

        let outcome = submit(&LoanForm::new(), &service).await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert_eq!(errors.len(), 3);
    }

    #[tokio::test]
    async fn test_rejection_with_field_detail_maps_to_invalid() {
        let mut service = MockLoanService::new();
        service.expect_calculate().times(1).returning(|_| {
            let mut errors = FieldErrors::default();
            errors.set(LoanField::Amount, "Ensure this value is greater than or equal to 1.");
            Err(ServiceError::Rejected(errors))
        });

        let outcome = submit(&filled_form(), &service).await;
        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert_eq!(
            errors.get(LoanField::Amount),
            Some("Ensure this value is greater than or equal to 1.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_without_field_detail_fails() {
        let mut service = MockLoanService::new();
        service
            .expect_calculate()
            .times(1)
            .returning(|_| Err(ServiceError::Rejected(FieldErrors::default())));

        let outcome = submit(&filled_form(), &service).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TRANSPORT_FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fixed_message() {
        let mut service = MockLoanService::new();
        service
            .expect_calculate()
            .times(1)
            .returning(|_| Err(ServiceError::Transport("connection refused".to_string())));

        let outcome = submit(&filled_form(), &service).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TRANSPORT_FAILURE_MESSAGE.to_string())
        );
    }
}
