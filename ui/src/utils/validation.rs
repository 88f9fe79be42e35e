//! Format validators for the sign-up form.
//!
//! Both predicates are pure and anchored at both ends of the input. The raw
//! patterns are exported so callers and tests can refer to them directly.

use regex::Regex;
use std::sync::LazyLock;

/// Local part (dot-separated atoms or a quoted string), `@`, then dot-separated
/// domain labels ending in a top-level label of at least two characters.
/// Matches the browser's notion of whitespace, so `\x{FEFF}` is excluded from
/// atoms and line terminators from quoted strings.
pub const EMAIL_PATTERN: &str = r#"(?i)^(([^<>()\[\].,;:\s@"\x{FEFF}]+(\.[^<>()\[\].,;:\s@"\x{FEFF}]+)*)|("[^\n\r\x{2028}\x{2029}]+"))@(([^<>()\[\].,;:\s@"\x{FEFF}]+\.)+[^<>()\[\].,;:\s@"\x{FEFF}]{2,})$"#;

/// Allowed alphabet and length (8 to 16 inclusive) for a password.
pub const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9@$!%*#?&]{8,16}$";

/// A password needs at least one ASCII letter...
pub const PASSWORD_LETTER_PATTERN: &str = r"[A-Za-z]";

/// ...one ASCII digit...
pub const PASSWORD_DIGIT_PATTERN: &str = r"[0-9]";

/// ...and one of the allowed symbols.
pub const PASSWORD_SYMBOL_PATTERN: &str = r"[@$!%*#?&]";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());
static PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(PASSWORD_PATTERN).unwrap());
static PASSWORD_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PASSWORD_LETTER_PATTERN).unwrap());
static PASSWORD_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PASSWORD_DIGIT_PATTERN).unwrap());
static PASSWORD_SYMBOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PASSWORD_SYMBOL_PATTERN).unwrap());

/// Returns true when `value` is a well-formed email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true when `value` satisfies the password complexity rules.
///
/// The `regex` crate has no look-around, so the "at least one of" rules are
/// checked as separate patterns alongside the alphabet/length pattern.
pub fn is_password(value: &str) -> bool {
    PASSWORD_REGEX.is_match(value)
        && PASSWORD_LETTER_REGEX.is_match(value)
        && PASSWORD_DIGIT_REGEX.is_match(value)
        && PASSWORD_SYMBOL_REGEX.is_match(value)
}
