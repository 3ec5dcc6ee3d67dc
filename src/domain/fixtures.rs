use rstest::*;

use super::{MemberInfoUpdateRequest, MemberRegisterRequest, PasswordHasher};

/// Readable, collision-free "hash" for tests
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, plain: &str) -> String {
        format!("hashed:{}", plain)
    }

    fn matches(&self, plain: &str, hash: &str) -> bool {
        self.hash(plain) == hash
    }
}

#[fixture]
pub fn hasher() -> PrefixHasher {
    PrefixHasher
}

pub fn register_request_with_email(email: &str) -> MemberRegisterRequest {
    MemberRegisterRequest {
        email: email.to_string(),
        nickname: "david".to_string(),
        password: "passwordSecret".to_string(),
    }
}

pub fn register_request() -> MemberRegisterRequest {
    register_request_with_email("jsjangdv@gmail.com")
}

pub fn info_update_request(profile_address: &str) -> MemberInfoUpdateRequest {
    MemberInfoUpdateRequest {
        nickname: "David".to_string(),
        profile_address: profile_address.to_string(),
        introduction: "Hello, I'm David".to_string(),
    }
}
