//! Locale typography helpers.
//!
//! Right-to-left locales render embedded numerals with their decimal digit
//! sequence reversed, matching the directionality convention of the
//! locale's message templates. Left-to-right locales use standard order.

/// Reading direction of a locale's typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Standard digit order.
    LeftToRight,
    /// Digit sequences are character-reversed before substitution.
    RightToLeft,
}

/// Reverses the decimal digit sequence of `value` ("87" becomes "78").
#[must_use]
pub fn reverse_digits(value: u32) -> String {
    value.to_string().chars().rev().collect()
}

/// Formats `value` for substitution into a template of the given
/// direction.
#[must_use]
pub fn format_number(value: u32, direction: TextDirection) -> String {
    match direction {
        TextDirection::LeftToRight => value.to_string(),
        TextDirection::RightToLeft => reverse_digits(value),
    }
}
