use std::sync::Arc;

use crate::{
    config::MemberConfig,
    domain::{Email, InvalidStateError, MemberError, MemberId, ProfileAddress, ValidationError},
    ports::repository,
};

pub mod activate;
pub mod deactivate;
pub mod find;
pub mod register;
pub mod update_info;

/// Member registration use-cases
///
/// Every request type is served through its own `tower::Service` implementation. Each call
/// loads at most one member, mutates it, and hands it back to the repository in a single save.
pub struct MemberRegister<R, E, H> {
    repository: Arc<R>,
    email_sender: Arc<E>,
    hasher: Arc<H>,
    config: Arc<MemberConfig>,
}

impl<R, E, H> MemberRegister<R, E, H> {
    pub fn new(repository: R, email_sender: E, hasher: H, config: MemberConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            email_sender: Arc::new(email_sender),
            hasher: Arc::new(hasher),
            config: Arc::new(config),
        }
    }
}

impl<R, E, H> Clone for MemberRegister<R, E, H> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            email_sender: self.email_sender.clone(),
            hasher: self.hasher.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidStateError),

    #[error("email {0} is already registered")]
    DuplicateEmail(Email),
    #[error("profile address {0} is already taken")]
    DuplicateProfile(ProfileAddress),
    #[error("member {0} does not exist")]
    NotFound(MemberId),
    #[error("member {0} was modified concurrently")]
    Conflict(MemberId),

    #[error("repository port error: {0:?}")]
    Repository(repository::Error),
}

impl From<MemberError> for Error {
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::Validation(err) => Self::Validation(err),
            MemberError::InvalidState(err) => Self::InvalidState(err),
        }
    }
}

/// Conflicts reported by the storage layer become domain errors
impl From<repository::Error> for Error {
    fn from(err: repository::Error) -> Self {
        match err {
            repository::Error::DuplicateEmail(email) => Self::DuplicateEmail(email),
            repository::Error::DuplicateProfile(address) => Self::DuplicateProfile(address),
            repository::Error::MemberDoesNotExist(member_id) => Self::NotFound(member_id),
            repository::Error::Conflict { member_id, .. } => Self::Conflict(member_id),
            err @ repository::Error::Adapter(_) => Self::Repository(err),
        }
    }
}
