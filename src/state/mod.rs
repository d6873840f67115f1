//! Application state module

mod app_state;
mod form;

pub use app_state::*;
pub use form::*;
