//! Subnet calculation logic.
//!
//! This module contains the calculation pipeline:
//! - [`validator`] - Validation of raw `a.b.c.d/n` input
//! - [`engine`] - Derivation of the subnet facts

mod engine;
mod validator;

// Re-export public functions
pub use engine::{compute_report, host_range};
pub use validator::validate_input;
