use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Bookings::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::ArtisanId).uuid().not_null())
                    .col(
                        ColumnDef::new(Bookings::ServiceCategory)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::ServiceName).string_len(150).not_null())
                    .col(ColumnDef::new(Bookings::ServicePrice).string_len(100).not_null())
                    .col(ColumnDef::new(Bookings::Date).date().not_null())
                    .col(ColumnDef::new(Bookings::Time).string_len(20).not_null())
                    .col(ColumnDef::new(Bookings::Address).text().not_null())
                    .col(
                        ColumnDef::new(Bookings::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Bookings::Urgency)
                            .string_len(20)
                            .not_null()
                            .default("normal"),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Bookings::TotalPrice).double())
                    .col(ColumnDef::new(Bookings::Rating).small_integer())
                    .col(ColumnDef::new(Bookings::Review).text())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_customer_id")
                            .from(Bookings::Table, Bookings::CustomerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_artisan_id")
                            .from(Bookings::Table, Bookings::ArtisanId)
                            .to(Artisans::Table, Artisans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookings
                ADD CONSTRAINT chk_bookings_status
                    CHECK (status IN ('pending', 'confirmed', 'in_progress', 'completed', 'cancelled')),
                ADD CONSTRAINT chk_bookings_urgency
                    CHECK (urgency IN ('normal', 'urgent', 'emergency')),
                ADD CONSTRAINT chk_bookings_rating
                    CHECK (rating IS NULL OR (rating >= 1 AND rating <= 5));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_bookings_customer_created_at
                ON bookings (customer_id, created_at DESC);

                CREATE INDEX idx_bookings_artisan_created_at
                ON bookings (artisan_id, created_at DESC);

                CREATE INDEX idx_bookings_status
                ON bookings (status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bookings_updated_at
                BEFORE UPDATE ON bookings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_bookings_updated_at ON bookings;
                DROP INDEX IF EXISTS idx_bookings_customer_created_at;
                DROP INDEX IF EXISTS idx_bookings_artisan_created_at;
                DROP INDEX IF EXISTS idx_bookings_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    CustomerId,
    ArtisanId,
    ServiceCategory,
    ServiceName,
    ServicePrice,
    Date,
    Time,
    Address,
    Description,
    Urgency,
    Status,
    TotalPrice,
    Rating,
    Review,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Artisans {
    Table,
    Id,
}
