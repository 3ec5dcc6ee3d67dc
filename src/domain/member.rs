use std::fmt;

use uuid::Uuid;

use super::{
    Email, InvalidStateError, MemberDetail, MemberError, MemberStatus, Nickname, PasswordHasher,
    ProfileAddress, StateMachine, ValidationError,
};

/// Unique identifier for a [`Member`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MemberId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw input for [`Member::register`]
#[derive(Clone, Debug)]
pub struct MemberRegisterRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

/// Raw input for [`Member::update_info`]
#[derive(Clone, Debug)]
pub struct MemberInfoUpdateRequest {
    pub nickname: String,
    pub profile_address: String,
    pub introduction: String,
}

/// Registered member account
///
/// All state changes go through the methods below. Every method checks that the change is legal
/// before touching any field, so a failed call leaves the member as it was.
///
/// `version` is the number of times this member has been persisted when this copy was loaded.
/// Repositories use it to reject saves from stale copies.
#[derive(Clone, Debug)]
pub struct Member {
    id: MemberId,
    version: u64,
    /// Unique across members and never changed after registration
    email: Email,
    nickname: Nickname,
    password_hash: String,
    status: MemberStatus,
    detail: MemberDetail,
}

impl Member {
    pub fn register(
        request: MemberRegisterRequest,
        hasher: &(impl PasswordHasher + ?Sized),
    ) -> Result<Self, ValidationError> {
        let email = Email::new(&request.email)?;
        let nickname = Nickname::new(&request.nickname)?;
        ensure_not_blank("password", &request.password)?;

        Ok(Self {
            id: MemberId::new(),
            version: 0,
            email,
            nickname,
            password_hash: hasher.hash(&request.password),
            status: MemberStatus::Pending,
            detail: MemberDetail::create(),
        })
    }

    pub fn activate(&mut self) -> Result<(), InvalidStateError> {
        self.status = self
            .status
            .transition_to(MemberStatus::Active)
            .map_err(|err| InvalidStateError {
                operation: "activate",
                current: err.from,
                expected: MemberStatus::Pending,
            })?;
        self.detail.activate();
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<(), InvalidStateError> {
        self.status = self
            .status
            .transition_to(MemberStatus::Deactivated)
            .map_err(|err| InvalidStateError {
                operation: "deactivate",
                current: err.from,
                expected: MemberStatus::Active,
            })?;
        self.detail.deactivate();
        Ok(())
    }

    pub fn verify_password(&self, plain: &str, hasher: &(impl PasswordHasher + ?Sized)) -> bool {
        hasher.matches(plain, &self.password_hash)
    }

    pub fn change_nickname(&mut self, nickname: &str) -> Result<(), ValidationError> {
        self.nickname = Nickname::new(nickname)?;
        Ok(())
    }

    pub fn change_password(
        &mut self,
        plain: &str,
        hasher: &(impl PasswordHasher + ?Sized),
    ) -> Result<(), ValidationError> {
        ensure_not_blank("password", plain)?;
        self.password_hash = hasher.hash(plain);
        Ok(())
    }

    /// Update nickname, profile address and introduction together
    ///
    /// Uniqueness of the profile address is not checked here.
    pub fn update_info(&mut self, request: &MemberInfoUpdateRequest) -> Result<(), MemberError> {
        if !self.is_active() {
            return Err(InvalidStateError {
                operation: "update info of",
                current: self.status,
                expected: MemberStatus::Active,
            }
            .into());
        }
        let nickname = Nickname::new(&request.nickname)?;
        let profile = ProfileAddress::new(&request.profile_address)?;

        self.nickname = nickname;
        self.detail.update_profile(profile, request.introduction.clone());
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Stamp the version a repository stored this member under
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn status(&self) -> MemberStatus {
        self.status
    }

    pub fn detail(&self) -> &MemberDetail {
        &self.detail
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}
