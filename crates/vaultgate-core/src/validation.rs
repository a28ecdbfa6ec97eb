//! Login form validation.
//!
//! Pure functions only. Two rules live here and they are intentionally not
//! the same rule:
//! - `can_submit` gates the submit button on non-emptiness alone.
//! - `validate_email` checks the address format and runs only on explicit
//!   validation (field blur, submit press).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// `\s` plus U+FEFF (byte order mark).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

/// Why an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailErrorKind {
    Empty,
    MalformedFormat,
}

impl EmailErrorKind {
    /// Inline text shown under the email field.
    pub fn message(self) -> &'static str {
        match self {
            EmailErrorKind::Empty => "Email is required",
            EmailErrorKind::MalformedFormat => "Invalid email format",
        }
    }
}

impl fmt::Display for EmailErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates an email address.
///
/// An empty string is always `Empty`, whatever else is true about it.
/// Otherwise the address needs exactly one `@`, a `.` somewhere after it with
/// characters on both sides, and no whitespace.
///
/// # Errors
/// Returns the kind of problem found in `raw`.
pub fn validate_email(raw: &str) -> Result<(), EmailErrorKind> {
    if raw.is_empty() {
        return Err(EmailErrorKind::Empty);
    }
    if !EMAIL_PATTERN.is_match(raw) {
        return Err(EmailErrorKind::MalformedFormat);
    }
    Ok(())
}

/// Whether the submit button is enabled.
///
/// Checks non-emptiness only; a malformed email still enables the button.
pub fn can_submit(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}
