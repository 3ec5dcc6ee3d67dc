use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// Email address of a member
///
/// The address is trimmed and lowercased on construction, so two `Email`s compare equal when
/// they point to the same mailbox regardless of casing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        let address = address.trim();
        if !EMAIL_PATTERN.is_match(address) {
            return Err(ValidationError::InvalidEmail(address.to_string()));
        }

        Ok(Self(address.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[test]
    fn test_equality() {
        let email1 = Email::new("jsjangdv@gmail.com");
        let email2 = Email::new("jsjangdv@gmail.com");

        assert_that!(email1).is_ok().is_equal_to(email2.unwrap());
    }

    #[test]
    fn test_normalized() {
        let res = Email::new("  JsJangDv@Gmail.COM ");

        assert_that!(res)
            .is_ok()
            .matches(|email| email.as_str() == "jsjangdv@gmail.com");
    }

    #[rstest]
    #[case("")]
    #[case("invalid email")]
    #[case("jsjangdv")]
    #[case("jsjangdv@gmail")]
    #[case("@gmail.com")]
    fn test_invalid(#[case] input: &str) {
        assert_that!(Email::new(input))
            .is_err()
            .matches(|err| matches!(err, ValidationError::InvalidEmail(_)));
    }
}
