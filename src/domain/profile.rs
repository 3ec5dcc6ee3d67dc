use std::fmt;

use super::ValidationError;

const MAX_PROFILE_ADDRESS_LEN: usize = 15;
const MIN_NICKNAME_LEN: usize = 1;
const MAX_NICKNAME_LEN: usize = 20;

/// Public handle of a member, distinct from their email
///
/// Only lowercase ASCII letters and digits are accepted. Uniqueness across members is not
/// something a single value can know about: it is enforced by the repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProfileAddress(String);

impl ProfileAddress {
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        let valid = !address.is_empty()
            && address.len() <= MAX_PROFILE_ADDRESS_LEN
            && address
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !valid {
            return Err(ValidationError::InvalidProfileAddress(address.to_string()));
        }

        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public form of the address, e.g. `@jsjang100`
    pub fn url(&self) -> String {
        format!("@{}", self.0)
    }
}

impl fmt::Display for ProfileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a member
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(nickname: &str) -> Result<Self, ValidationError> {
        let nickname = nickname.trim();
        let len = nickname.chars().count();
        if !(MIN_NICKNAME_LEN..=MAX_NICKNAME_LEN).contains(&len) {
            return Err(ValidationError::Length {
                field: "nickname",
                min: MIN_NICKNAME_LEN,
                max: MAX_NICKNAME_LEN,
                actual: len,
            });
        }

        Ok(Self(nickname.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
