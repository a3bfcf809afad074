mod list_notifications_service;
mod mark_read_service;
mod notification_writer;

pub use list_notifications_service::ListNotificationsService;
pub use mark_read_service::MarkReadService;
pub use notification_writer::NotificationWriter;
