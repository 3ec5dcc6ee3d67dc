mod detail;
mod email;
mod error;
mod member;
mod password;
mod profile;
mod status;

#[cfg(test)]
pub(crate) mod fixtures;

pub use detail::MemberDetail;
pub use email::Email;
pub use error::{InvalidStateError, MemberError, ValidationError};
pub use member::{Member, MemberId, MemberInfoUpdateRequest, MemberRegisterRequest};
pub use password::{MockPasswordHasher, PasswordHasher};
pub use profile::{Nickname, ProfileAddress};
pub use status::{InvalidTransition, MemberStatus, StateMachine};
