use crate::domain::Email;

/// Outgoing notifications to a member
#[mockall::automock]
#[async_trait::async_trait]
pub trait EmailSender {
    async fn send(&self, email: &Email, subject: &str, body: &str) -> Result<(), Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Concrete adapter errors
    ///
    /// Delivery failures, rejected recipients, unreachable relays and the like.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
