pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_084945_create_verification_codes_table;
mod m20250306_101500_create_artisans_table;
mod m20250307_093010_create_bookings_table;
mod m20250308_140200_create_reviews_table;
mod m20250309_111845_create_notifications_table;
mod m20250310_163320_create_push_subscriptions_table;
mod m20250311_120045_create_payments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_084945_create_verification_codes_table::Migration),
            Box::new(m20250306_101500_create_artisans_table::Migration),
            Box::new(m20250307_093010_create_bookings_table::Migration),
            Box::new(m20250308_140200_create_reviews_table::Migration),
            Box::new(m20250309_111845_create_notifications_table::Migration),
            Box::new(m20250310_163320_create_push_subscriptions_table::Migration),
            Box::new(m20250311_120045_create_payments_table::Migration),
        ]
    }
}
