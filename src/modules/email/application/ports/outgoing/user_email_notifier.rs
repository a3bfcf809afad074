#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEmailKind {
    Confirmed,
    Completed,
    Cancelled,
}

/// Everything needed to render a booking status mail.
#[derive(Debug, Clone)]
pub struct BookingEmail {
    pub to_email: String,
    pub to_name: String,
    pub kind: BookingEmailKind,
    pub service_name: String,
    pub booking_date: String,
    pub booking_time: String,
    pub artisan_name: Option<String>,
    pub message: Option<String>,
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        to_email: &str,
        full_name: &str,
        code: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_booking_update(
        &self,
        email: BookingEmail,
    ) -> Result<(), UserEmailNotificationError>;
}
