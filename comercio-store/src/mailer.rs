use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::info;

use crate::app_config::SmtpConfig;
use comercio_core::mailer::{MailError, Mailer};

const SUBJECT: &str = "📄 Archivo PDF de productos";
const BODY: &str =
    "Adjunto encontrarás el archivo PDF con la información de productos y empresas.";

/// SMTP implementation of the mail boundary. Opens an authenticated
/// STARTTLS session against the configured submission endpoint and sends
/// one message per call.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let sender: Mailbox = config
            .user
            .parse()
            .map_err(|_| MailError::Message(format!("invalid sender address: {}", config.user)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .timeout(Some(Duration::from_secs(30)))
            .build();

        Ok(Self { transport, sender })
    }

    fn build_message(
        &self,
        recipient: Mailbox,
        filename: &str,
        pdf: Vec<u8>,
    ) -> Result<Message, MailError> {
        let content_type = ContentType::parse("application/pdf")
            .map_err(|e| MailError::Message(e.to_string()))?;
        let attachment = Attachment::new(filename.to_string()).body(pdf, content_type);

        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(SUBJECT)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(BODY.to_string()))
                    .singlepart(attachment),
            )
            .map_err(|e| MailError::Message(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_pdf(
        &self,
        recipient: &str,
        filename: &str,
        pdf: Vec<u8>,
    ) -> Result<(), MailError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| MailError::InvalidRecipient(recipient.to_string()))?;

        let message = self.build_message(to, filename, pdf)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!(recipient, "PDF mail dispatched");
        Ok(())
    }
}
