pub mod notification_repository_postgres;
pub mod sea_orm_entity;

pub use notification_repository_postgres::NotificationRepositoryPostgres;
