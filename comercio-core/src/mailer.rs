use async_trait::async_trait;

/// Mail dispatch errors. Every failure along the connect/auth/submit
/// path collapses into one of these; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("failed to build message: {0}")]
    Message(String),

    #[error("smtp transport failure: {0}")]
    Transport(String),
}

/// Boundary trait for sending a single PDF attachment by mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submits one message with `pdf` attached as `filename` to
    /// `recipient`. Blocking from the caller's perspective; resolves
    /// once the submission server has accepted or refused the message.
    async fn send_pdf(
        &self,
        recipient: &str,
        filename: &str,
        pdf: Vec<u8>,
    ) -> Result<(), MailError>;
}
