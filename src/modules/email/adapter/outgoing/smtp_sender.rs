use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::email::application::ports::outgoing::email_sender::EmailSender;

const SENDER_NAME: &str = "Fi-Khidmatik";

#[derive(Debug, thiserror::Error)]
pub enum SmtpSetupError {
    #[error("invalid sender address: {0}")]
    InvalidFrom(String),

    #[error("SMTP transport: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Seam over the lettre transport so delivery can be faked in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, message: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, message: Message) -> Result<(), String> {
        self.send(message)
            .await
            .map(drop)
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Result<Self, SmtpSetupError> {
        let address = from_email
            .parse()
            .map_err(|_| SmtpSetupError::InvalidFrom(from_email.to_string()))?;

        Ok(Self {
            mailer,
            from: Mailbox::new(Some(SENDER_NAME.to_string()), address),
        })
    }

    /// Authenticated relay over TLS.
    pub fn relay(
        server: &str,
        username: &str,
        password: &str,
        from_email: &str,
    ) -> Result<Self, SmtpSetupError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Self::with_mailer(Box::new(transport), from_email)
    }

    /// Plain SMTP without TLS, for Mailpit in development.
    pub fn local(host: &str, port: u16, from_email: &str) -> Result<Self, SmtpSetupError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::with_mailer(Box::new(transport), from_email)
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| format!("invalid recipient {to}: {e}"))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.deliver(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const FROM: &str = "noreply@fi-khidmatik.com";

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn deliver(&self, message: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn deliver(&self, _message: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn deliver(&self, _: Message) -> Result<(), String> {
            panic!("mailer reached with an invalid recipient");
        }
    }

    #[tokio::test]
    async fn sends_html_mail_from_named_sender() {
        let mailer = RecordingMailer::default();
        let sender = SmtpEmailSender::with_mailer(Box::new(mailer.clone()), FROM).unwrap();

        sender
            .send_email("client@example.ma", "Bienvenue", "<p>Salam</p>")
            .await
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let from = sent[0].headers().get_raw("From").unwrap_or_default().to_string();
        assert!(from.contains("Fi-Khidmatik"), "got {from}");
        assert!(from.contains(FROM));
    }

    #[test]
    fn invalid_from_address_is_rejected_at_setup() {
        let result = SmtpEmailSender::with_mailer(Box::new(UnreachableMailer), "invalid-from-email");
        assert!(matches!(result, Err(SmtpSetupError::InvalidFrom(_))));
    }

    #[tokio::test]
    async fn invalid_recipient_never_reaches_mailer() {
        let sender = SmtpEmailSender::with_mailer(Box::new(UnreachableMailer), FROM).unwrap();

        let result = sender.send_email("not-an-email", "Sujet", "<p>Test</p>").await;

        assert!(result.unwrap_err().contains("not-an-email"));
    }

    #[tokio::test]
    async fn transport_failure_is_returned() {
        let sender = SmtpEmailSender::with_mailer(Box::new(FailingMailer), FROM).unwrap();

        let result = sender
            .send_email("client@example.ma", "Sujet", "<p>Corps</p>")
            .await;

        assert_eq!(result, Err("connection refused".to_string()));
    }
}
