mod notification_repository;

pub use notification_repository::{
    NewNotification, NotificationRepository, NotificationRepositoryError, NotificationResult,
};
