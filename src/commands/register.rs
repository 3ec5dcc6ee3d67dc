use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Member, MemberRegisterRequest, PasswordHasher},
    ports::{email::EmailSender, repository::MemberRepository},
};
use tower::Service;

use super::{Error, MemberRegister};

impl<R, E, H> Service<MemberRegisterRequest> for MemberRegister<R, E, H>
where
    R: MemberRepository + 'static,
    E: EmailSender + 'static,
    H: PasswordHasher + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: MemberRegisterRequest) -> Self::Future {
        let repository = self.repository.clone();
        let email_sender = self.email_sender.clone();
        let hasher = self.hasher.clone();
        let config = self.config.clone();
        Box::pin(async move {
            let member = Member::register(req, hasher.as_ref())?;

            // Email uniqueness is enforced by the repository, not checked up front
            let member = repository.save(&member).await?;
            tracing::info!(member_id = %member.id(), "member registered");

            // Registration stands even if the notification cannot be delivered
            let mail = &config.registration_email;
            if let Err(err) = email_sender
                .send(member.email(), &mail.subject, &mail.body)
                .await
            {
                tracing::warn!(
                    member_id = %member.id(),
                    error = %err,
                    "failed to send registration email"
                );
            }

            Ok(member)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::database::memory::MemoryDatabase,
        commands::testing::*,
        config::MemberConfig,
        domain::{fixtures::*, Email, MemberStatus, ValidationError},
        ports::{
            email::{self, MockEmailSender},
            repository::MockMemberRepository,
        },
    };
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    #[tokio::test]
    async fn test_call() -> Result<(), BoxError> {
        // GIVEN
        // * an empty database
        // * an email sender expecting exactly one registration email
        let database = MemoryDatabase::default();
        let expected_email = Email::new("jsjangdv@gmail.com")?;
        let mut email_sender = MockEmailSender::new();
        email_sender
            .expect_send()
            .times(1)
            .withf(move |email, subject, _| {
                email == &expected_email && subject == "Please complete your registration"
            })
            .returning(|_, _, _| Ok(()));
        let service = MemberRegister::new(
            database.clone(),
            email_sender,
            PrefixHasher,
            MemberConfig::default(),
        );

        // WHEN registering a member
        let res = service.clone().oneshot(register_request()).await;

        // THEN
        // * the member is pending with a registration timestamp
        // * it was persisted
        let member = res?;
        assert_that!(member.status()).is_equal_to(MemberStatus::Pending);
        assert_that!(member.detail().activated_at()).is_none();
        assert_that!(database.find_by_id(member.id()).await)
            .is_ok()
            .matches(|stored| stored.email() == member.email());
        Arc::into_inner(service.email_sender).unwrap().checkpoint();

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email() -> Result<(), BoxError> {
        let database = MemoryDatabase::default();
        let service = memory_register(&database);
        registered(&service, register_request()).await?;

        let res = service.clone().oneshot(register_request()).await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::DuplicateEmail(_)));

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_email() -> Result<(), BoxError> {
        // GIVEN two callers sharing one database
        let database = MemoryDatabase::default();
        let first = memory_register(&database);
        let second = memory_register(&database);

        // WHEN both register the same email at once
        let (a, b) = tokio::join!(
            registered(&first, register_request()),
            registered(&second, register_request_with_email("JSJANGDV@gmail.com")),
        );

        // THEN exactly one wins
        assert_that!(a.is_ok() ^ b.is_ok()).is_true();

        Ok(())
    }

    #[tokio::test]
    async fn test_email_failure_does_not_fail_registration() -> Result<(), BoxError> {
        // GIVEN an email sender that always fails
        let database = MemoryDatabase::default();
        let mut email_sender = MockEmailSender::new();
        email_sender
            .expect_send()
            .times(1)
            .returning(|_, _, _| Err(email::Error::Adapter("relay unreachable".into())));
        let service = MemberRegister::new(
            database.clone(),
            email_sender,
            PrefixHasher,
            MemberConfig::default(),
        );

        // WHEN registering
        let res = service.clone().oneshot(register_request()).await;

        // THEN the member is still registered and stored
        let member = res?;
        assert_that!(database.find_by_id(member.id()).await).is_ok();

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_request() -> Result<(), BoxError> {
        // GIVEN a repository that must never be touched
        let mut repository = MockMemberRepository::new();
        repository.expect_save().never();
        let mut email_sender = MockEmailSender::new();
        email_sender.expect_send().never();
        let service = MemberRegister::new(
            repository,
            email_sender,
            PrefixHasher,
            MemberConfig::default(),
        );

        // WHEN registering with a bad email
        let req = register_request_with_email("jsjangdv");
        let res = service.clone().oneshot(req).await;

        // THEN it is rejected as invalid input
        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::Validation(ValidationError::InvalidEmail(_))));
        Arc::into_inner(service.repository).unwrap().checkpoint();

        Ok(())
    }
}
