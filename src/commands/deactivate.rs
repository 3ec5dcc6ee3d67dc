use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Member, MemberId},
    ports::repository::MemberRepository,
};
use tower::Service;

use super::{Error, MemberRegister};

/// Close an active member account
#[derive(Clone, Copy, Debug)]
pub struct DeactivateRequest {
    pub member_id: MemberId,
}

impl<R, E, H> Service<DeactivateRequest> for MemberRegister<R, E, H>
where
    R: MemberRepository + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: DeactivateRequest) -> Self::Future {
        let repository = self.repository.clone();
        Box::pin(async move {
            let mut member = repository.find_by_id(req.member_id).await?;
            member.deactivate()?;

            let member = repository.save(&member).await?;
            tracing::info!(member_id = %member.id(), "member deactivated");

            Ok(member)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::database::memory::MemoryDatabase,
        commands::{activate::ActivateRequest, testing::*},
        domain::{fixtures::*, MemberStatus},
        ports::repository::MockMemberRepository,
    };
    use mockall::predicate::*;
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    #[tokio::test]
    async fn test_call() -> Result<(), BoxError> {
        // GIVEN an active member
        let database = MemoryDatabase::default();
        let service = memory_register(&database);
        let member = registered(&service, register_request()).await?;
        let member_id = member.id();
        service.clone().oneshot(ActivateRequest { member_id }).await?;

        // WHEN deactivating it
        let res = service.clone().oneshot(DeactivateRequest { member_id }).await;

        // THEN it is deactivated with a deactivation timestamp
        assert_that!(res).is_ok().matches(|member| {
            member.status() == MemberStatus::Deactivated
                && member.detail().deactivated_at().is_some()
        });

        // AND it can never be activated again
        let res = service.clone().oneshot(ActivateRequest { member_id }).await;
        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::InvalidState(_)));

        Ok(())
    }

    #[tokio::test]
    async fn test_pending_member() -> Result<(), BoxError> {
        // GIVEN a repository holding a pending member
        let member = Member::register(register_request(), &hasher())?;
        let member_id = member.id();
        let mut repository = MockMemberRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .with(eq(member_id))
            .returning(move |_| Ok(member.clone()));
        repository.expect_save().never();
        let service = MemberRegister::new(
            repository,
            quiet_email_sender(),
            PrefixHasher,
            Default::default(),
        );

        // WHEN deactivating it
        let res = service.clone().oneshot(DeactivateRequest { member_id }).await;

        // THEN
        // * the transition is rejected
        // * nothing is saved
        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::InvalidState(_)));
        Arc::into_inner(service.repository).unwrap().checkpoint();

        Ok(())
    }
}
