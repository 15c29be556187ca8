//! Signup payload validation.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum allowed length for first and last names, in characters.
pub const NAME_MAX_CHARS: usize = 100;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntactic check only; deliverability is out of scope.
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Domain error returned when signup payload values are invalid.
///
/// The `Display` output is the exact message the client receives, so the
/// wording is part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email does not look like an address.
    InvalidEmailFormat,
    /// First name was missing or blank once trimmed.
    EmptyFirstName,
    /// First name exceeds the maximum character count.
    FirstNameTooLong { max: usize },
    /// Last name was missing or blank once trimmed.
    EmptyLastName,
    /// Last name exceeds the maximum character count.
    LastNameTooLong { max: usize },
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email is required"),
            Self::InvalidEmailFormat => write!(f, "invalid email format"),
            Self::EmptyFirstName => write!(f, "first name is required"),
            Self::FirstNameTooLong { max } => {
                write!(f, "first name must be less than {max} characters")
            }
            Self::EmptyLastName => write!(f, "last name is required"),
            Self::LastNameTooLong { max } => {
                write!(f, "last name must be less than {max} characters")
            }
        }
    }
}

impl std::error::Error for SignupValidationError {}

/// Validated signup details ready for registration.
///
/// ## Invariants
/// - All fields are trimmed of surrounding whitespace.
/// - `email` is non-empty and matches the address shape check.
/// - `first_name` and `last_name` are non-empty and at most
///   [`NAME_MAX_CHARS`] characters.
///
/// Rules are applied in a fixed order and the first failure wins, so a
/// payload with several problems reports the email one first.
///
/// # Examples
/// ```
/// use signup_service::domain::SignupDetails;
///
/// let details = SignupDetails::try_from_parts(" ada@example.com ", "Ada", "Lovelace").unwrap();
/// assert_eq!(details.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    email: String,
    first_name: String,
    last_name: String,
}

impl SignupDetails {
    /// Construct validated details from raw field inputs.
    pub fn try_from_parts(
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, SignupValidationError> {
        let email = email.trim();
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if email.is_empty() {
            return Err(SignupValidationError::EmptyEmail);
        }
        if !email_regex().is_match(email) {
            return Err(SignupValidationError::InvalidEmailFormat);
        }

        if first_name.is_empty() {
            return Err(SignupValidationError::EmptyFirstName);
        }
        if first_name.chars().count() > NAME_MAX_CHARS {
            return Err(SignupValidationError::FirstNameTooLong {
                max: NAME_MAX_CHARS,
            });
        }

        if last_name.is_empty() {
            return Err(SignupValidationError::EmptyLastName);
        }
        if last_name.chars().count() > NAME_MAX_CHARS {
            return Err(SignupValidationError::LastNameTooLong {
                max: NAME_MAX_CHARS,
            });
        }

        Ok(Self {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        })
    }

    /// Trimmed email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Trimmed first name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Trimmed last name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "Ada", "Lovelace", SignupValidationError::EmptyEmail)]
    #[case("   ", "Ada", "Lovelace", SignupValidationError::EmptyEmail)]
    #[case("not-an-address", "Ada", "Lovelace", SignupValidationError::InvalidEmailFormat)]
    #[case("@example.com", "Ada", "Lovelace", SignupValidationError::InvalidEmailFormat)]
    #[case("ada@example", "Ada", "Lovelace", SignupValidationError::InvalidEmailFormat)]
    #[case("ada@example.c", "Ada", "Lovelace", SignupValidationError::InvalidEmailFormat)]
    #[case("ad a@example.com", "Ada", "Lovelace", SignupValidationError::InvalidEmailFormat)]
    #[case("ada@example.com", "", "Lovelace", SignupValidationError::EmptyFirstName)]
    #[case("ada@example.com", "  ", "Lovelace", SignupValidationError::EmptyFirstName)]
    #[case("ada@example.com", "Ada", "", SignupValidationError::EmptyLastName)]
    fn invalid_payloads(
        #[case] email: &str,
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] expected: SignupValidationError,
    ) {
        let err = SignupDetails::try_from_parts(email, first_name, last_name)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn name_over_the_limit_is_rejected() {
        let long = "a".repeat(NAME_MAX_CHARS + 1);
        let err = SignupDetails::try_from_parts("ada@example.com", &long, "Lovelace")
            .expect_err("oversized first name must fail");
        assert_eq!(err, SignupValidationError::FirstNameTooLong { max: NAME_MAX_CHARS });
        assert_eq!(
            err.to_string(),
            "first name must be less than 100 characters"
        );

        let err = SignupDetails::try_from_parts("ada@example.com", "Ada", &long)
            .expect_err("oversized last name must fail");
        assert_eq!(err, SignupValidationError::LastNameTooLong { max: NAME_MAX_CHARS });
    }

    #[rstest]
    fn name_at_the_limit_is_accepted() {
        let exact = "a".repeat(NAME_MAX_CHARS);
        let details = SignupDetails::try_from_parts("ada@example.com", &exact, &exact)
            .expect("names at the limit should succeed");
        assert_eq!(details.first_name().chars().count(), NAME_MAX_CHARS);
    }

    #[rstest]
    fn length_counts_characters_not_bytes() {
        // 100 two-byte characters stay within the limit.
        let accented = "é".repeat(NAME_MAX_CHARS);
        let details = SignupDetails::try_from_parts("ada@example.com", &accented, "Lovelace")
            .expect("multi-byte names within the limit should succeed");
        assert_eq!(details.first_name(), accented);
    }

    #[rstest]
    fn first_failing_rule_wins() {
        // Both the email and the first name are invalid; the email rule runs first.
        let err = SignupDetails::try_from_parts("nope", "", "")
            .expect_err("invalid inputs must fail");
        assert_eq!(err, SignupValidationError::InvalidEmailFormat);

        // Email passes, so the first-name rule reports next.
        let err = SignupDetails::try_from_parts("ada@example.com", "", "")
            .expect_err("invalid inputs must fail");
        assert_eq!(err, SignupValidationError::EmptyFirstName);
    }

    #[rstest]
    #[case("  ada@example.com  ", " Ada ", " Lovelace ")]
    #[case("grace+navy@mil.example.org", "Grace", "Hopper")]
    #[case("first.last%x@sub.domain.example", "First", "Last")]
    fn valid_payloads_are_trimmed(
        #[case] email: &str,
        #[case] first_name: &str,
        #[case] last_name: &str,
    ) {
        let details = SignupDetails::try_from_parts(email, first_name, last_name)
            .expect("valid inputs should succeed");
        assert_eq!(details.email(), email.trim());
        assert_eq!(details.first_name(), first_name.trim());
        assert_eq!(details.last_name(), last_name.trim());
    }

    #[rstest]
    fn validation_is_idempotent_on_trimmed_input() {
        let details = SignupDetails::try_from_parts("  ada@example.com ", "Ada", "Lovelace")
            .expect("valid inputs should succeed");
        let again = SignupDetails::try_from_parts(
            details.email(),
            details.first_name(),
            details.last_name(),
        )
        .expect("already-clean inputs should succeed");
        assert_eq!(details, again);
    }
}
