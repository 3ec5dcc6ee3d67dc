use crate::{
    domain::Email,
    ports::email::{EmailSender, Error},
};

/// Email sender that only logs the message
///
/// Stands in for a real delivery service in development and tests.
#[derive(Clone, Debug, Default)]
pub struct LoggingEmailSender;

#[async_trait::async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, email: &Email, subject: &str, body: &str) -> Result<(), Error> {
        tracing::info!(%email, subject, body_len = body.len(), "sending email");
        Ok(())
    }
}
