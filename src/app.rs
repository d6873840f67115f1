//! Application state and core logic

use crate::service::LoanService;
use crate::state::AppState;
use crate::submit::submit;
use crate::validate::{validate, LoanField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the loan-calculation service
    service: Box<dyn LoanService>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(service: Box<dyn LoanService>) -> Self {
        Self {
            state: AppState::default(),
            service,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Submit from anywhere with Ctrl+S, or Enter on the button row
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Enter if self.state.form.is_button_row_active() => self.submit().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// The field identity of the active form field, None on the button row
    fn active_loan_field(&self) -> Option<LoanField> {
        match self.state.form.active_field_index {
            0 => Some(LoanField::Amount),
            1 => Some(LoanField::Rate),
            2 => Some(LoanField::Term),
            _ => None,
        }
    }

    /// Type a character into the active field.
    /// Editing a field dismisses that field's message and nothing else.
    fn input_char(&mut self, c: char) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.push_char(c);
        }
        if let Some(field) = self.active_loan_field() {
            self.state.errors.clear(field);
        }
    }

    /// Delete the last character of the active field
    fn backspace(&mut self) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.pop_char();
        }
        if let Some(field) = self.active_loan_field() {
            self.state.errors.clear(field);
        }
    }

    /// Run one submission attempt.
    ///
    /// Ignored while a request is in flight, so at most one call is ever
    /// outstanding. A failed validation replaces the field errors and never
    /// touches the network; otherwise the coordinator is awaited once and
    /// the busy flag is released when the call settles.
    pub async fn submit(&mut self) {
        if self.state.busy {
            tracing::debug!("submission ignored while one is in flight");
            return;
        }

        // A new attempt always blanks the previously shown payment first
        self.state.monthly_payment = None;

        if let Err(errors) = validate(&self.state.form) {
            self.state.errors = errors;
            return;
        }

        self.state.busy = true;
        self.state.transport_error = None;
        let outcome = submit(&self.state.form, self.service.as_ref()).await;
        self.state.apply_outcome(outcome);
        self.state.busy = false;
    }
}
