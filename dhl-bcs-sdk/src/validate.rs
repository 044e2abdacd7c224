//! Field checks shared by the option holders.

use crate::errors::validation_error::ValidationError;

/// Free text must be non-empty and within the length the API accepts.
pub(crate) fn check_text(
    field: &'static str,
    text: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual == 0 || actual > max {
        return Err(ValidationError::InvalidLength { field, max, actual });
    }

    Ok(())
}

/// Time frames are written as `HHMMHHMM`, e.g. 10:00 - 12:30 as `10001230`.
pub(crate) fn check_time_frame(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.len() != 8 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::InvalidTimeFrame { field });
    }

    for time in [&value[0..4], &value[4..8]] {
        let hours: u8 = time[0..2]
            .parse()
            .map_err(|_| ValidationError::InvalidTimeFrame { field })?;
        let minutes: u8 = time[2..4]
            .parse()
            .map_err(|_| ValidationError::InvalidTimeFrame { field })?;

        if hours > 23 || minutes > 59 {
            return Err(ValidationError::InvalidTimeFrame { field });
        }
    }

    Ok(())
}

/// Account numbers carry the EKP, procedure and participation, 14 characters.
pub(crate) fn check_account_number(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != 14 {
        return Err(ValidationError::InvalidAccountNumber { field, actual });
    }

    Ok(())
}

pub(crate) fn check_weight(value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::InvalidWeight { value });
    }

    Ok(())
}
