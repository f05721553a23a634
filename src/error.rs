//! Validation errors raised before a subnet calculation.

use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// User-facing input failures. The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter an IP address in CIDR notation (e.g. 192.168.1.0/24)")]
    EmptyInput,

    #[error("Invalid format. Use IP/CIDR notation (e.g. 192.168.1.0/24)")]
    InvalidFormat { input: String },

    #[error("The CIDR prefix must be a value between 0 and 32")]
    PrefixOutOfRange { prefix: u32 },

    #[error("Invalid IP address")]
    OctetOutOfRange { octet: String },
}

impl ValidationError {
    /// Short machine-readable name, used by the CSV and JSON outputs.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "empty-input",
            ValidationError::InvalidFormat { .. } => "format-invalid",
            ValidationError::PrefixOutOfRange { .. } => "prefix-out-of-range",
            ValidationError::OctetOutOfRange { .. } => "octet-out-of-range",
        }
    }
}
