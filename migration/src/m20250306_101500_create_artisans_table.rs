use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create artisans table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Artisans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artisans::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Artisans::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Artisans::Bio).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Artisans::Experience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Artisans::Services)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Artisans::Portfolio)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Artisans::Availability).json_binary().not_null())
                    .col(
                        ColumnDef::new(Artisans::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Artisans::TotalReviews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Artisans::CompletedJobs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Artisans::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Artisans::ResponseTime)
                            .string_len(50)
                            .not_null()
                            .default("< 1 heure"),
                    )
                    .col(
                        ColumnDef::new(Artisans::ApprovalStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Artisans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Artisans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisans_user_id")
                            .from(Artisans::Table, Artisans::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE artisans
                ADD CONSTRAINT chk_artisans_rating CHECK (rating >= 0 AND rating <= 5),
                ADD CONSTRAINT chk_artisans_approval_status
                    CHECK (approval_status IN ('pending', 'approved', 'rejected'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Directory ordering
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_artisans_rating
                ON artisans (rating DESC, total_reviews DESC);
                "#,
            )
            .await?;

        // Category containment filter on services
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_artisans_services_gin
                ON artisans USING GIN (services jsonb_path_ops);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_artisans_updated_at
                BEFORE UPDATE ON artisans
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
                DROP TRIGGER IF EXISTS update_artisans_updated_at ON artisans;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_artisans_rating;
                DROP INDEX IF EXISTS idx_artisans_services_gin;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Artisans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Artisans {
    Table,
    Id,
    UserId,
    Bio,
    Experience,
    Services,
    Portfolio,
    Availability,
    Rating,
    TotalReviews,
    CompletedJobs,
    IsAvailable,
    ResponseTime,
    ApprovalStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
