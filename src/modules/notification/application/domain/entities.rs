use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BookingNew,
    BookingConfirmed,
    BookingCancelled,
    BookingCompleted,
    ReviewReceived,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::BookingNew => "booking_new",
            NotificationType::BookingConfirmed => "booking_confirmed",
            NotificationType::BookingCancelled => "booking_cancelled",
            NotificationType::BookingCompleted => "booking_completed",
            NotificationType::ReviewReceived => "review_received",
            NotificationType::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "booking_new" => Some(NotificationType::BookingNew),
            "booking_confirmed" => Some(NotificationType::BookingConfirmed),
            "booking_cancelled" => Some(NotificationType::BookingCancelled),
            "booking_completed" => Some(NotificationType::BookingCompleted),
            "review_received" => Some(NotificationType::ReviewReceived),
            "system" => Some(NotificationType::System),
            _ => None,
        }
    }
}

/// Something a user should hear about. Each variant renders its own French title and message.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    BookingNew {
        customer_name: String,
        service_name: String,
    },
    BookingConfirmed {
        artisan_name: String,
    },
    BookingCancelled {
        canceller_name: String,
        by_artisan: bool,
    },
    BookingCompleted {
        artisan_name: String,
    },
    ReviewReceived {
        customer_name: String,
        rating: i32,
    },
    System {
        title: String,
        message: String,
    },
}

impl NotificationEvent {
    pub fn kind(&self) -> NotificationType {
        match self {
            NotificationEvent::BookingNew { .. } => NotificationType::BookingNew,
            NotificationEvent::BookingConfirmed { .. } => NotificationType::BookingConfirmed,
            NotificationEvent::BookingCancelled { .. } => NotificationType::BookingCancelled,
            NotificationEvent::BookingCompleted { .. } => NotificationType::BookingCompleted,
            NotificationEvent::ReviewReceived { .. } => NotificationType::ReviewReceived,
            NotificationEvent::System { .. } => NotificationType::System,
        }
    }

    pub fn title(&self) -> String {
        match self {
            NotificationEvent::BookingNew { .. } => "Nouvelle réservation".to_string(),
            NotificationEvent::BookingConfirmed { .. } => "Réservation confirmée".to_string(),
            NotificationEvent::BookingCancelled { .. } => "Réservation annulée".to_string(),
            NotificationEvent::BookingCompleted { .. } => "Travail terminé".to_string(),
            NotificationEvent::ReviewReceived { .. } => "Nouvel avis reçu".to_string(),
            NotificationEvent::System { title, .. } => title.clone(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            NotificationEvent::BookingNew {
                customer_name,
                service_name,
            } => format!("{customer_name} a demandé un service de {service_name}"),
            NotificationEvent::BookingConfirmed { artisan_name } => {
                format!("{artisan_name} a confirmé votre réservation")
            }
            NotificationEvent::BookingCancelled {
                canceller_name,
                by_artisan: true,
            } => format!("{canceller_name} a annulé la réservation"),
            NotificationEvent::BookingCancelled {
                canceller_name,
                by_artisan: false,
            } => format!("Votre réservation avec {canceller_name} a été annulée"),
            NotificationEvent::BookingCompleted { artisan_name } => format!(
                "Le travail de {artisan_name} est terminé. N'oubliez pas de laisser un avis!"
            ),
            NotificationEvent::ReviewReceived {
                customer_name,
                rating,
            } => format!("{customer_name} vous a donné {rating} étoiles"),
            NotificationEvent::System { message, .. } => message.clone(),
        }
    }
}

/// Deep-link ids stored alongside a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artisan_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,
}

impl NotificationData {
    pub fn booking(booking_id: Uuid) -> Self {
        Self {
            booking_id: Some(booking_id),
            ..Default::default()
        }
    }

    pub fn with_artisan(mut self, artisan_id: Uuid) -> Self {
        self.artisan_id = Some(artisan_id);
        self
    }

    pub fn with_customer(mut self, customer_id: Uuid) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_new_mentions_customer_and_service() {
        let event = NotificationEvent::BookingNew {
            customer_name: "Amina".to_string(),
            service_name: "Plomberie".to_string(),
        };
        assert_eq!(event.kind(), NotificationType::BookingNew);
        assert_eq!(event.title(), "Nouvelle réservation");
        assert_eq!(event.message(), "Amina a demandé un service de Plomberie");
    }

    #[test]
    fn cancellation_wording_depends_on_who_cancelled() {
        let by_artisan = NotificationEvent::BookingCancelled {
            canceller_name: "Karim".to_string(),
            by_artisan: true,
        };
        let by_customer = NotificationEvent::BookingCancelled {
            canceller_name: "Amina".to_string(),
            by_artisan: false,
        };
        assert_eq!(by_artisan.message(), "Karim a annulé la réservation");
        assert_eq!(
            by_customer.message(),
            "Votre réservation avec Amina a été annulée"
        );
    }

    #[test]
    fn review_received_includes_rating() {
        let event = NotificationEvent::ReviewReceived {
            customer_name: "Said".to_string(),
            rating: 4,
        };
        assert_eq!(event.title(), "Nouvel avis reçu");
        assert_eq!(event.message(), "Said vous a donné 4 étoiles");
    }

    #[test]
    fn data_omits_missing_ids() {
        let booking_id = Uuid::new_v4();
        let json = serde_json::to_value(NotificationData::booking(booking_id)).unwrap();
        assert_eq!(json, serde_json::json!({ "bookingId": booking_id }));
    }

    #[test]
    fn type_round_trips_through_str() {
        for kind in [
            NotificationType::BookingNew,
            NotificationType::BookingConfirmed,
            NotificationType::BookingCancelled,
            NotificationType::BookingCompleted,
            NotificationType::ReviewReceived,
            NotificationType::System,
        ] {
            assert_eq!(NotificationType::parse(kind.as_str()), Some(kind));
        }
    }
}
