//! Loan form fields and navigation

/// A single numeric text field of the loan form
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    value: String,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: String::new(),
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value.
    /// Only numeric text is accepted (digits, decimal point, minus sign).
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Index of the submit button row in the tab order
pub const BUTTON_ROW: usize = 3;

/// The loan calculator form: three numeric fields plus the button row
#[derive(Debug, Clone)]
pub struct LoanForm {
    pub loan_amount: FormField,
    pub interest_rate: FormField,
    pub loan_term: FormField,
    pub active_field_index: usize,
}

impl LoanForm {
    pub fn new() -> Self {
        Self {
            loan_amount: FormField::new("loan_amount", "Loan Amount", "Enter your loan amount"),
            interest_rate: FormField::new(
                "interest_rate",
                "Interest Rate (%)",
                "Enter interest rate",
            ),
            loan_term: FormField::new("loan_term", "Loan Term (months)", "Enter loan term"),
            active_field_index: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        4 // amount, rate, term, button row
    }

    /// Move to the next field (wraps through the button row)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move to the previous field (wraps through the button row)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == BUTTON_ROW
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.loan_amount),
            1 => Some(&self.interest_rate),
            2 => Some(&self.loan_term),
            // Index 3 is the button row, no FormField for it
            _ => None,
        }
    }

    /// The active field, or None when the button row is active
    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.loan_amount),
            1 => Some(&mut self.interest_rate),
            2 => Some(&mut self.loan_term),
            _ => None,
        }
    }
}

impl Default for LoanForm {
    fn default() -> Self {
        Self::new()
    }
}
