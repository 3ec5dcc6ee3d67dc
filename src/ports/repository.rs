use crate::domain::{Email, Member, MemberId, ProfileAddress};

/// Persistence boundary for [`Member`] aggregates
///
/// Implementations are the only arbiter of the email and profile address uniqueness
/// constraints: checking an index and writing the member must happen as one atomic unit.
/// The same unit checks [`Member::version`] against the stored one, so a copy loaded before
/// another write cannot overwrite it.
#[mockall::automock]
#[async_trait::async_trait]
pub trait MemberRepository {
    /// Insert or replace a member, returning it with its new version
    async fn save(&self, member: &Member) -> Result<Member, Error>;
    async fn find_by_id(&self, member_id: MemberId) -> Result<Member, Error>;
    async fn find_by_profile_address(
        &self,
        address: &ProfileAddress,
    ) -> Result<Option<Member>, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Another member is already registered with this email
    #[error("email {0} is already registered")]
    DuplicateEmail(Email),

    /// Another member already holds this profile address
    #[error("profile address {0} is already taken")]
    DuplicateProfile(ProfileAddress),

    #[error("member {0} does not exist")]
    MemberDoesNotExist(MemberId),

    /// The member was saved by someone else since this copy was loaded
    #[error("member {member_id} is at version {stored}, not {loaded}")]
    Conflict {
        member_id: MemberId,
        loaded: u64,
        stored: u64,
    },

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
