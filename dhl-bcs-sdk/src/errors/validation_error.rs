use std::error::Error;
use std::fmt;

/// Errors raised while a request node is built from an option holder.
///
/// Field names in the variants are the API field names, not the Rust ones.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A service is enabled but the detail value it requires is unset.
    MissingDetail { field: &'static str },
    /// A free-text value is empty or longer than the API accepts.
    InvalidLength {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// A time frame is not of the 8-digit `HHMMHHMM` form.
    InvalidTimeFrame { field: &'static str },
    /// An account number is not exactly 14 characters.
    InvalidAccountNumber {
        field: &'static str,
        actual: usize,
    },
    /// A parcel weight of zero or less.
    InvalidWeight { value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::MissingDetail { field } => {
                write!(f, "{field} is required by an enabled service but unset")
            }

            ValidationError::InvalidLength { field, max, actual } => {
                write!(
                    f,
                    "{field} must be between 1 and {max} characters, got {actual}"
                )
            }

            ValidationError::InvalidTimeFrame { field } => {
                write!(f, "{field} must be an 8 digit HHMMHHMM time frame")
            }

            ValidationError::InvalidAccountNumber { field, actual } => {
                write!(f, "{field} must be exactly 14 characters, got {actual}")
            }

            ValidationError::InvalidWeight { value } => {
                write!(f, "weight must be positive, got {value} kg")
            }
        }
    }
}

impl Error for ValidationError {}
