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

/// Confirm a pending member
#[derive(Clone, Copy, Debug)]
pub struct ActivateRequest {
    pub member_id: MemberId,
}

impl<R, E, H> Service<ActivateRequest> for MemberRegister<R, E, H>
where
    R: MemberRepository + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ActivateRequest) -> Self::Future {
        let repository = self.repository.clone();
        Box::pin(async move {
            let mut member = repository.find_by_id(req.member_id).await?;
            member.activate()?;

            let member = repository.save(&member).await?;
            tracing::info!(member_id = %member.id(), "member activated");

            Ok(member)
        })
    }
}
