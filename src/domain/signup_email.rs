use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$")
        .expect("Email pattern should be a valid regex")
});

/// Returns `true` if `candidate` looks like `local@domain.tld`, with a
/// top level domain of two to four ASCII letters.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupEmail(String);

impl SignupEmail {
    /// Returns an instance of `SignupEmail` if the input is an address
    /// the signup form accepts.
    pub fn parse(email: String) -> Result<SignupEmail, String> {
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid signup email", email))
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SignupEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
