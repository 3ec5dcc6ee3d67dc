use chrono::{DateTime, Utc};

use super::ProfileAddress;

/// Registration timestamps and public profile of a member
///
/// Only the owning [`super::Member`] mutates a `MemberDetail`, which is why every mutator is
/// crate-private. Each lifecycle timestamp is written at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDetail {
    registered_at: DateTime<Utc>,
    activated_at: Option<DateTime<Utc>>,
    deactivated_at: Option<DateTime<Utc>>,
    profile: Option<ProfileAddress>,
    introduction: Option<String>,
}

impl MemberDetail {
    pub(crate) fn create() -> Self {
        Self {
            registered_at: Utc::now(),
            activated_at: None,
            deactivated_at: None,
            profile: None,
            introduction: None,
        }
    }

    pub(crate) fn activate(&mut self) {
        debug_assert!(self.activated_at.is_none(), "activated_at already set");
        self.activated_at = Some(Utc::now());
    }

    pub(crate) fn deactivate(&mut self) {
        debug_assert!(self.deactivated_at.is_none(), "deactivated_at already set");
        self.deactivated_at = Some(Utc::now());
    }

    pub(crate) fn update_profile(&mut self, profile: ProfileAddress, introduction: String) {
        self.profile = Some(profile);
        self.introduction = Some(introduction);
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub fn activated_at(&self) -> Option<DateTime<Utc>> {
        self.activated_at
    }

    pub fn deactivated_at(&self) -> Option<DateTime<Utc>> {
        self.deactivated_at
    }

    pub fn profile(&self) -> Option<&ProfileAddress> {
        self.profile.as_ref()
    }

    pub fn introduction(&self) -> Option<&str> {
        self.introduction.as_deref()
    }
}
