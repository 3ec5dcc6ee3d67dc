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

/// Look up a member by id
#[derive(Clone, Copy, Debug)]
pub struct FindRequest {
    pub member_id: MemberId,
}

impl<R, E, H> Service<FindRequest> for MemberRegister<R, E, H>
where
    R: MemberRepository + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: FindRequest) -> Self::Future {
        let repository = self.repository.clone();
        Box::pin(async move { Ok(repository.find_by_id(req.member_id).await?) })
    }
}
