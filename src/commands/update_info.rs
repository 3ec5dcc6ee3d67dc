use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Member, MemberId, MemberInfoUpdateRequest, ProfileAddress},
    ports::repository::MemberRepository,
};
use tower::Service;

use super::{Error, MemberRegister};

/// Change the nickname, profile address and introduction of an active member
#[derive(Clone, Debug)]
pub struct UpdateInfoRequest {
    pub member_id: MemberId,
    pub info: MemberInfoUpdateRequest,
}

impl<R, E, H> Service<UpdateInfoRequest> for MemberRegister<R, E, H>
where
    R: MemberRepository + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: UpdateInfoRequest) -> Self::Future {
        let repository = self.repository.clone();
        Box::pin(async move {
            let mut member = repository.find_by_id(req.member_id).await?;

            // Keeping one's own address is not a conflict
            let profile = ProfileAddress::new(&req.info.profile_address)?;
            if let Some(owner) = repository.find_by_profile_address(&profile).await? {
                if owner.id() != member.id() {
                    return Err(Error::DuplicateProfile(profile));
                }
            }

            member.update_info(&req.info)?;

            // A concurrent update may have claimed the address since the lookup; the
            // repository rejects the save in that case.
            let member = repository.save(&member).await?;
            tracing::info!(member_id = %member.id(), profile = %profile, "member info updated");

            Ok(member)
        })
    }
}
