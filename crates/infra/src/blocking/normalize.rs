use super::BlockingError;

/// Reason stored when the admin leaves the field blank.
pub const DEFAULT_REASON: &str = "Blocked by admin";

/// Normalize a wall-clock time to `HH:MM:SS`.
///
/// `HH:MM` gets `:00` appended, `HH:MM:SS` is returned unchanged. Any other
/// shape, or an out-of-range component, is rejected.
pub fn normalize_time(raw: &str) -> Result<String, BlockingError> {
    let invalid = || BlockingError::InvalidInput(format!("invalid time '{raw}', expected HH:MM or HH:MM:SS"));

    let parts: Vec<&str> = raw.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(invalid());
    }

    let limits = [23u32, 59, 59];
    for (part, max) in parts.iter().zip(limits) {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u32 = part.parse().map_err(|_| invalid())?;
        if value > max {
            return Err(invalid());
        }
    }

    if parts.len() == 2 {
        Ok(format!("{raw}:00"))
    } else {
        Ok(raw.to_string())
    }
}

/// Trim the reason, falling back to [`DEFAULT_REASON`] when nothing is left.
pub fn normalize_reason(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(reason) if !reason.is_empty() => reason.to_string(),
        _ => DEFAULT_REASON.to_string(),
    }
}
