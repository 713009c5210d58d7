//! Field validators for checkout and account forms.
//!
//! Every validator is a pure predicate over user input. Form-level
//! validation collects messages per field, in the order the fields were
//! checked.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length for the strength check.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password score at which a password is accepted.
const MIN_PASSWORD_SCORE: u8 = 3;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("Invalid regex"));

static POSTAL_IN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("Invalid regex"));

static POSTAL_US_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("Invalid regex"));

static POSTAL_UK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9]{1,2}[A-Z]?\s?[0-9][A-Z]{2}$").expect("Invalid regex")
});

static POSTAL_CA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z][0-9][A-Z]\s?[0-9][A-Z][0-9]$").expect("Invalid regex")
});

/// Check a card number with the Luhn checksum.
///
/// Non-digit characters are ignored; the remaining digits must number
/// between 13 and 19.
#[must_use]
pub fn is_valid_card_number(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if !(13..=19).contains(&digits.len()) {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Loose email check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Phone number check after removing whitespace.
#[must_use]
pub fn is_valid_phone(input: &str) -> bool {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Postal code check for a country (`IN`, `US`, `UK` or `CA`).
///
/// Codes for other countries are accepted as-is.
#[must_use]
pub fn is_valid_postal_code(input: &str, country: &str) -> bool {
    let pattern = match country.trim().to_ascii_uppercase().as_str() {
        "IN" => &POSTAL_IN_RE,
        "US" => &POSTAL_US_RE,
        "UK" => &POSTAL_UK_RE,
        "CA" => &POSTAL_CA_RE,
        _ => return true,
    };
    pattern.is_match(input.trim())
}

/// Person name: at least two characters, letters and spaces only.
#[must_use]
pub fn is_valid_name(input: &str) -> bool {
    let name = input.trim();
    name.chars().count() >= 2 && NAME_RE.is_match(name)
}

/// Non-blank check.
#[must_use]
pub fn is_present(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub is_valid: bool,
    /// Number of criteria met, 0 to 5.
    pub score: u8,
    /// One message per unmet criterion.
    pub feedback: Vec<&'static str>,
}

/// Score a password against length, lowercase, uppercase, digit and
/// special-character criteria.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let criteria = [
        (
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Include at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Include at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Include at least one number",
        ),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "Include at least one special character",
        ),
    ];

    let mut score = 0;
    let mut feedback = Vec::new();
    for (met, message) in criteria {
        if met {
            score += 1;
        } else {
            feedback.push(message);
        }
    }

    PasswordStrength {
        is_valid: score >= MIN_PASSWORD_SCORE,
        score,
        feedback,
    }
}

/// Outcome of a single form rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Valid,
    /// Failed without a message; reported as `Invalid {field}`.
    Invalid,
    /// Failed with a specific message.
    Message(String),
}

impl From<bool> for RuleOutcome {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl From<Result<(), String>> for RuleOutcome {
    fn from(result: Result<(), String>) -> Self {
        result.map_or_else(Self::Message, |()| Self::Valid)
    }
}

/// Per-field error messages, in the order fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(String, String)>,
}

impl FormErrors {
    /// Create an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a rule outcome for a field. Later failures for the same
    /// field replace the earlier message.
    pub fn record(&mut self, field: &str, outcome: impl Into<RuleOutcome>) {
        let message = match outcome.into() {
            RuleOutcome::Valid => return,
            RuleOutcome::Invalid => format!("Invalid {field}"),
            RuleOutcome::Message(message) => message,
        };
        self.insert(field, message);
    }

    /// Record `message` for `field` unless `valid` holds.
    pub fn require(&mut self, field: &str, valid: bool, message: &str) {
        if !valid {
            self.insert(field, message.to_owned());
        }
    }

    fn insert(&mut self, field: &str, message: String) {
        if let Some(entry) = self.errors.iter_mut().find(|(name, _)| name == field) {
            entry.1 = message;
        } else {
            self.errors.push((field.to_owned(), message));
        }
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Iterate `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl core::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Run a set of field rules and collect the failures.
pub fn validate_form<'a, I, O>(rules: I) -> FormErrors
where
    I: IntoIterator<Item = (&'a str, O)>,
    O: Into<RuleOutcome>,
{
    let mut errors = FormErrors::new();
    for (field, outcome) in rules {
        errors.record(field, outcome);
    }
    errors
}
