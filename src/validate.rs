//! Local validation of the loan form
//!
//! Validation is a pure pass over the raw field text: every field is checked
//! even when an earlier one fails, so a single pass yields the complete set
//! of messages.

use crate::state::LoanForm;
use std::collections::HashMap;

/// Identity of a loan form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanField {
    Amount,
    Rate,
    Term,
}

impl LoanField {
    /// All three fields, in form order
    pub const ALL: [LoanField; 3] = [LoanField::Amount, LoanField::Rate, LoanField::Term];

    /// The JSON key this field uses on the wire
    pub fn wire_key(&self) -> &'static str {
        match self {
            LoanField::Amount => "loan_amount",
            LoanField::Rate => "interest_rate",
            LoanField::Term => "loan_term",
        }
    }
}

/// Per-field validation or rejection messages.
/// Replaced wholesale on each validation pass; empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: HashMap<LoanField, String>,
}

impl FieldErrors {
    pub fn set(&mut self, field: LoanField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: LoanField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the message for one field, leaving the others in place
    pub fn clear(&mut self, field: LoanField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// A loan request proven to satisfy all positivity invariants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedLoan {
    pub amount: f64,
    pub rate: f64,
    pub term_months: u32,
}

/// Validate the raw form text into a [`ValidatedLoan`].
///
/// Each field carries at most one message: required beats positive, and for
/// the term a positive-but-fractional value yields only the whole-number
/// message.
pub fn validate(form: &LoanForm) -> Result<ValidatedLoan, FieldErrors> {
    let mut errors = FieldErrors::default();

    let amount = check_positive_number(
        form.loan_amount.as_text(),
        LoanField::Amount,
        "Loan amount is required.",
        "Loan amount must be a positive number.",
        &mut errors,
    );

    let rate = check_positive_number(
        form.interest_rate.as_text(),
        LoanField::Rate,
        "Interest rate is required.",
        "Interest rate must be a positive number.",
        &mut errors,
    );

    let term = check_term(form.loan_term.as_text(), &mut errors);

    if errors.is_empty() {
        // All three checks passed, so the values are present
        Ok(ValidatedLoan {
            amount: amount.unwrap_or_default(),
            rate: rate.unwrap_or_default(),
            term_months: term.unwrap_or_default(),
        })
    } else {
        Err(errors)
    }
}

fn check_positive_number(
    raw: &str,
    field: LoanField,
    required_msg: &str,
    positive_msg: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.set(field, required_msg);
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => {
            errors.set(field, positive_msg);
            None
        }
    }
}

/// The term must be a positive whole number of months.
///
/// The positivity check applies to the integer truncation of the value, the
/// whole-number check to the value itself: "12.5" is positive but not whole,
/// while "0.5" truncates to zero and fails positivity.
fn check_term(raw: &str, errors: &mut FieldErrors) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.set(LoanField::Term, "Loan term is required.");
        return None;
    }
    let Ok(value) = raw.parse::<f64>() else {
        errors.set(LoanField::Term, "Loan term must be a positive number.");
        return None;
    };
    // Out of range either way; the wire value must be exactly what was entered
    if !value.is_finite() || value.trunc() <= 0.0 || value.trunc() > f64::from(u32::MAX) {
        errors.set(LoanField::Term, "Loan term must be a positive number.");
        return None;
    }
    if value.fract() != 0.0 {
        errors.set(LoanField::Term, "Loan term must be a whole number.");
        return None;
    }
    Some(value as u32)
}
