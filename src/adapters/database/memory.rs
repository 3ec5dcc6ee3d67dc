use crate::{
    domain::{Email, Member, MemberId, MemberStatus, ProfileAddress},
    ports::repository::{Error, MemberRepository},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// In-memory member store with unique indexes on email and profile address
///
/// Members and both indexes live behind a single lock, so the uniqueness check and the write
/// it guards cannot interleave with another save.
#[derive(Clone, Debug, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    members: HashMap<MemberId, Member>,
    emails: HashMap<Email, MemberId>,
    profiles: HashMap<ProfileAddress, MemberId>,
}

#[async_trait::async_trait]
impl MemberRepository for MemoryDatabase {
    async fn save(&self, member: &Member) -> Result<Member, Error> {
        let mut tables = self.tables.lock()?;
        let member_id = member.id();

        // Reject conflicts before touching anything
        let stored_version = tables.members.get(&member_id).map_or(0, Member::version);
        if member.version() != stored_version {
            return Err(Error::Conflict {
                member_id,
                loaded: member.version(),
                stored: stored_version,
            });
        }
        if let Some(owner) = tables.emails.get(member.email()) {
            if *owner != member_id {
                return Err(Error::DuplicateEmail(member.email().clone()));
            }
        }
        // Deactivated members give their address back
        let profile = match member.status() {
            MemberStatus::Deactivated => None,
            _ => member.detail().profile(),
        };
        if let Some(profile) = profile {
            if let Some(owner) = tables.profiles.get(profile) {
                if *owner != member_id {
                    return Err(Error::DuplicateProfile(profile.clone()));
                }
            }
        }

        // Release the previous profile address if the member no longer holds it
        let previous_profile = tables
            .members
            .get(&member_id)
            .and_then(|stored| stored.detail().profile().cloned());
        if let Some(previous) = previous_profile {
            if Some(&previous) != profile && tables.profiles.get(&previous) == Some(&member_id) {
                tables.profiles.remove(&previous);
            }
        }

        let saved = member.clone().with_version(stored_version + 1);
        tables.emails.insert(saved.email().clone(), member_id);
        if let Some(profile) = profile {
            tables.profiles.insert(profile.clone(), member_id);
        }
        tables.members.insert(member_id, saved.clone());
        tracing::debug!(%member_id, version = saved.version(), "saved member");

        Ok(saved)
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Member, Error> {
        self.tables
            .lock()?
            .members
            .get(&member_id)
            .cloned()
            .ok_or(Error::MemberDoesNotExist(member_id))
    }

    async fn find_by_profile_address(
        &self,
        address: &ProfileAddress,
    ) -> Result<Option<Member>, Error> {
        let tables = self.tables.lock()?;
        let member = tables
            .profiles
            .get(address)
            .and_then(|member_id| tables.members.get(member_id))
            .cloned();

        Ok(member)
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
