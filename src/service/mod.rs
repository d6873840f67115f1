//! Loan service module for HTTP communication

mod client;
mod traits;

pub use client::HttpLoanClient;
pub use traits::{LoanService, ServiceError};

#[cfg(test)]
pub use traits::MockLoanService;
