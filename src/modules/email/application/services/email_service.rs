use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    BookingEmail, BookingEmailKind, EmailSender, UserEmailNotificationError, UserEmailNotifier,
};

/// Renders the marketplace mails and hands them to an `EmailSender`.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn verification_body(full_name: &str, code: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 560px; margin: 0 auto;">
  <h2 style="color: #0f766e;">Bienvenue sur Fi-Khidmatik, {full_name}!</h2>
  <p>Voici votre code de vérification :</p>
  <p style="font-size: 32px; font-weight: bold; letter-spacing: 8px;">{code}</p>
  <p>Ce code expire dans 15 minutes.</p>
  <p style="color: #6b7280; font-size: 12px;">Si vous n'avez pas créé de compte, ignorez cet email.</p>
</div>"#
        )
    }

    fn booking_subject(kind: BookingEmailKind) -> &'static str {
        match kind {
            BookingEmailKind::Confirmed => "Votre réservation est confirmée",
            BookingEmailKind::Completed => "Votre service est terminé",
            BookingEmailKind::Cancelled => "Votre réservation a été annulée",
        }
    }

    fn booking_body(email: &BookingEmail) -> String {
        let headline = match email.kind {
            BookingEmailKind::Confirmed => match &email.artisan_name {
                Some(artisan) => format!("{artisan} a confirmé votre réservation."),
                None => "Votre réservation a été confirmée.".to_string(),
            },
            BookingEmailKind::Completed => match &email.artisan_name {
                Some(artisan) => format!(
                    "Le travail de {artisan} est terminé. N'oubliez pas de laisser un avis!"
                ),
                None => "Le travail est terminé. N'oubliez pas de laisser un avis!".to_string(),
            },
            BookingEmailKind::Cancelled => email
                .message
                .clone()
                .unwrap_or_else(|| "La réservation a été annulée.".to_string()),
        };

        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 560px; margin: 0 auto;">
  <h2 style="color: #0f766e;">Bonjour {name},</h2>
  <p>{headline}</p>
  <ul>
    <li><strong>Service :</strong> {service}</li>
    <li><strong>Date :</strong> {date}</li>
    <li><strong>Heure :</strong> {time}</li>
  </ul>
  <p>L'équipe Fi-Khidmatik</p>
</div>"#,
            name = email.to_name,
            service = email.service_name,
            date = email.booking_date,
            time = email.booking_time,
        )
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_code(
        &self,
        to_email: &str,
        full_name: &str,
        code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let body = Self::verification_body(full_name, code);

        self.sender
            .send_email(to_email, "Votre code de vérification Fi-Khidmatik", &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }

    async fn send_booking_update(
        &self,
        email: BookingEmail,
    ) -> Result<(), UserEmailNotificationError> {
        let body = Self::booking_body(&email);

        self.sender
            .send_email(&email.to_email, Self::booking_subject(email.kind), &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}
