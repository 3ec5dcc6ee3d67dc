/// Lifecycle status of a [`super::Member`]
///
/// Transitions only move forward: `Pending -> Active -> Deactivated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberStatus {
    /// Registered but not yet confirmed
    Pending,
    Active,
    /// Terminal
    Deactivated,
}

/// A transition the state machine does not allow
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot transition from {from:?} to {to:?}")]
pub struct InvalidTransition<S: std::fmt::Debug> {
    pub from: S,
    pub to: S,
}

/// Status enums whose transitions are restricted
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn valid_transitions(&self) -> Vec<Self>;

    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

impl StateMachine for MemberStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MemberStatus::*;
        matches!((self, target), (Pending, Active) | (Active, Deactivated))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MemberStatus::*;
        match self {
            Pending => vec![Active],
            Active => vec![Deactivated],
            Deactivated => vec![],
        }
    }
}
