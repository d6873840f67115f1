//! Application state

use super::LoanForm;
use crate::submit::SubmitOutcome;
use crate::validate::FieldErrors;

/// Display state for the calculator.
/// Mutated only by [`crate::app::App`] via the documented transitions.
#[derive(Debug, Default)]
pub struct AppState {
    /// The loan form being edited
    pub form: LoanForm,
    /// Field-level validation or rejection messages
    pub errors: FieldErrors,
    /// The last returned monthly payment, if any
    pub monthly_payment: Option<f64>,
    /// Generic message for a failed request, shown instead of a result
    pub transport_error: Option<String>,
    /// True while a submission is in flight
    pub busy: bool,
}

impl AppState {
    /// Apply the outcome of a settled submission to the display state.
    /// At most one of payment, field errors, or transport error survives.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Payment(payment) => {
                self.errors = FieldErrors::default();
                self.transport_error = None;
                self.monthly_payment = Some(payment);
            }
            SubmitOutcome::Invalid(errors) => {
                self.monthly_payment = None;
                self.transport_error = None;
                self.errors = errors;
            }
            SubmitOutcome::Failed(message) => {
                self.monthly_payment = None;
                self.errors = FieldErrors::default();
                self.transport_error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::LoanField;

    fn state_with_everything() -> AppState {
        let mut state = AppState::default();
        state.monthly_payment = Some(188.71);
        state.transport_error = Some("Failed to calculate loan payment. Please try again.".into());
        state.errors.set(LoanField::Amount, "Loan amount is required.");
        state
    }

    #[test]
    fn test_payment_outcome_clears_errors() {
        let mut state = state_with_everything();
        state.apply_outcome(SubmitOutcome::Payment(212.47));
        assert_eq!(state.monthly_payment, Some(212.47));
        assert!(state.errors.is_empty());
        assert!(state.transport_error.is_none());
    }

    #[test]
    fn test_invalid_outcome_clears_payment() {
        let mut state = state_with_everything();
        let mut errors = FieldErrors::default();
        errors.set(LoanField::Term, "Loan term must be a whole number.");
        state.apply_outcome(SubmitOutcome::Invalid(errors));
        assert!(state.monthly_payment.is_none());
        assert!(state.transport_error.is_none());
        assert_eq!(
            state.errors.get(LoanField::Term),
            Some("Loan term must be a whole number.")
        );
        assert!(state.errors.get(LoanField::Amount).is_none());
    }

    #[test]
    fn test_failed_outcome_clears_field_errors() {
        let mut state = state_with_everything();
        state.apply_outcome(SubmitOutcome::Failed(
            "Failed to calculate loan payment. Please try again.".into(),
        ));
        assert!(state.monthly_payment.is_none());
        assert!(state.errors.is_empty());
        assert!(state.transport_error.is_some());
    }
}
