//! Numeric and boolean parsing for UI configuration values
//!
//! The host hands sizes over as floating point numbers. Non-finite values
//! are rejected; the caller decides whether to skip the field.

/// Convert a size (width, height, text size) to a non-negative integer
pub fn dimension(value: f64) -> Option<i32> {
    if !value.is_finite() || value < 0.0 || value > i32::MAX as f64 {
        return None;
    }
    Some(value.round() as i32)
}

/// Convert an offset, which may be negative, to an integer
pub fn offset(value: f64) -> Option<i32> {
    if !value.is_finite() || value.abs() > i32::MAX as f64 {
        return None;
    }
    Some(value.round() as i32)
}

/// Convert an index into a bounded range `0..len`
pub fn index_within(value: f64, len: usize) -> Option<usize> {
    let idx = dimension(value)? as usize;
    (idx < len).then_some(idx)
}

/// A flag only counts when it is explicitly `true`
pub fn is_set(flag: Option<bool>) -> bool {
    flag == Some(true)
}
