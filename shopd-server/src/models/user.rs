//! User field validation
//!
//! Create payloads trim their input and accept names of 2+ characters.
//! Update payloads take values as sent and keep the API's stricter
//! 3-character minimum for names.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for user names
const NAME_MAX_LEN: usize = 50;

/// Minimum name length on create
const NAME_CREATE_MIN_LEN: usize = 2;

/// Minimum name length on update
const NAME_UPDATE_MIN_LEN: usize = 3;

/// Maximum length for email addresses (matches VARCHAR(255) column)
const EMAIL_MAX_LEN: usize = 255;

/// Email syntax: non-empty local part, '@', domain containing a dot
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate a name from a create payload.
    ///
    /// # Rules
    /// - Trimmed before checking
    /// - 2 to 50 characters
    ///
    /// # Example
    /// ```
    /// use shopd_server::models::UserName;
    ///
    /// assert!(UserName::new("Al").is_ok());
    /// assert!(UserName::new("A").is_err()); // too short
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::with_min(s.trim(), NAME_CREATE_MIN_LEN)
    }

    /// Validate a name from an update payload (min 3 chars, no trim).
    pub fn for_update(s: &str) -> Result<Self, ValidationError> {
        Self::with_min(s, NAME_UPDATE_MIN_LEN)
    }

    fn with_min(s: &str, min: usize) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.len() < min {
            return Err(ValidationError::TooShort { field: "name", min });
        }

        if s.len() > NAME_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: NAME_MAX_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEmail(String);

impl UserEmail {
    /// Validate an email from a create payload (trimmed).
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::check(s.trim())
    }

    /// Validate an email from an update payload (as sent).
    pub fn for_update(s: &str) -> Result<Self, ValidationError> {
        Self::check(s)
    }

    fn check(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if s.len() > EMAIL_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: EMAIL_MAX_LEN,
            });
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be a valid email address",
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated create payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: UserEmail,
}

/// Validated update payload; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<UserName>,
    pub email: Option<UserEmail>,
}

impl UserPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
