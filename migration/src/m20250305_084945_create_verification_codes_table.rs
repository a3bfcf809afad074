use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::Code)
                            .string_len(6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::Kind)
                            .string_len(32)
                            .not_null()
                            .default("email_verification"),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::Used)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(VerificationCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_verification_codes_email_code
                ON verification_codes (email, code);
                "#,
            )
            .await?;

        // Used by the resend rate limit (latest code per email)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_verification_codes_email_created_at
                ON verification_codes (email, kind, created_at DESC);
                "#,
            )
            .await?;

        // Used by the expiry sweeper
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_verification_codes_expires_at
                ON verification_codes (expires_at);
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
                DROP INDEX IF EXISTS idx_verification_codes_email_code;
                DROP INDEX IF EXISTS idx_verification_codes_email_created_at;
                DROP INDEX IF EXISTS idx_verification_codes_expires_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VerificationCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VerificationCodes {
    Table,
    Id,
    Email,
    Code,
    Kind,
    ExpiresAt,
    Used,
    CreatedAt,
}
