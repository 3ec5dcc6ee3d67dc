use super::MemberStatus;

/// Malformed input rejected while building or mutating a [`super::Member`]
///
/// These are never retried: the caller has to fix the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("invalid profile address: {0:?}")]
    InvalidProfileAddress(String),

    #[error("field '{field}' must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("field '{0}' cannot be blank")]
    Blank(&'static str),
}

/// An operation was attempted while the member was in the wrong [`MemberStatus`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot {operation} a member in status {current:?}, expected {expected:?}")]
pub struct InvalidStateError {
    pub operation: &'static str,
    pub current: MemberStatus,
    pub expected: MemberStatus,
}

/// Failures of member operations that can fail for more than one reason
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
}
