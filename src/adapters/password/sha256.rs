use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::PasswordHasher;

const SEPARATOR: char = '$';

/// Salted SHA-256 password hasher
///
/// Hashes are stored as `<salt>$<hex digest>`, where the digest covers the salt followed by the
/// plaintext. Every call to [`PasswordHasher::hash`] draws a fresh salt.
#[derive(Clone, Debug, Default)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    fn digest(salt: &str, plain: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(plain.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plain: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, plain);
        format!("{}{}{}", salt, SEPARATOR, hex::encode(digest))
    }

    fn matches(&self, plain: &str, hash: &str) -> bool {
        let Some((salt, expected)) = hash.split_once(SEPARATOR) else {
            return false;
        };
        let Ok(expected) = hex::decode(expected) else {
            return false;
        };

        let actual = Self::digest(salt, plain);
        if actual.len() != expected.len() {
            return false;
        }
        actual.ct_eq(&expected).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[test]
    fn test_matches() {
        let hasher = Sha256PasswordHasher;

        let hash = hasher.hash("secret");

        assert_that!(hasher.matches("secret", &hash)).is_true();
        assert_that!(hasher.matches("wrong", &hash)).is_false();
    }

    #[test]
    fn test_salted() {
        let hasher = Sha256PasswordHasher;

        let first = hasher.hash("secret");
        let second = hasher.hash("secret");

        assert_that!(first).is_not_equal_to(&second);
        assert_that!(hasher.matches("secret", &second)).is_true();
    }

    #[rstest]
    #[case("")]
    #[case("secret")]
    #[case("salt$not-hex")]
    #[case("salt$abcd")]
    fn test_malformed_hash(#[case] hash: &str) {
        assert_that!(Sha256PasswordHasher.matches("secret", hash)).is_false();
    }
}
