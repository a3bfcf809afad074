use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::VerificationKind,
    ports::outgoing::{
        NewVerificationCode, VerificationCodeRecord, VerificationCodeRepository,
        VerificationCodeRepositoryError,
    },
};

use super::sea_orm_entity::verification_codes::{
    ActiveModel as CodeActiveModel, Column as CodeColumn, Entity as CodeEntity,
};

#[derive(Clone, Debug)]
pub struct VerificationCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> VerificationCodeRepositoryError {
    VerificationCodeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VerificationCodeRepository for VerificationCodeRepositoryPostgres {
    async fn delete_for_email(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<u64, VerificationCodeRepositoryError> {
        let result = CodeEntity::delete_many()
            .filter(CodeColumn::Email.eq(email))
            .filter(CodeColumn::Kind.eq(kind.as_str()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected)
    }

    async fn create(
        &self,
        data: NewVerificationCode,
    ) -> Result<VerificationCodeRecord, VerificationCodeRepositoryError> {
        let model = CodeActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            code: Set(data.code),
            kind: Set(data.kind.as_str().to_string()),
            expires_at: Set(data.expires_at.into()),
            used: Set(false),
            created_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(model.to_repository_result())
    }

    async fn find_unused(
        &self,
        email: &str,
        code: &str,
        kind: VerificationKind,
    ) -> Result<Option<VerificationCodeRecord>, VerificationCodeRepositoryError> {
        let model = CodeEntity::find()
            .filter(CodeColumn::Email.eq(email))
            .filter(CodeColumn::Code.eq(code))
            .filter(CodeColumn::Kind.eq(kind.as_str()))
            .filter(CodeColumn::Used.eq(false))
            .order_by_desc(CodeColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn latest_created_at(
        &self,
        email: &str,
        kind: VerificationKind,
    ) -> Result<Option<DateTime<Utc>>, VerificationCodeRepositoryError> {
        let model = CodeEntity::find()
            .filter(CodeColumn::Email.eq(email))
            .filter(CodeColumn::Kind.eq(kind.as_str()))
            .order_by_desc(CodeColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.created_at.with_timezone(&Utc)))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), VerificationCodeRepositoryError> {
        CodeEntity::update_many()
            .col_expr(CodeColumn::Used, Expr::value(true))
            .filter(CodeColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn delete_expired(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, VerificationCodeRepositoryError> {
        let result = CodeEntity::delete_many()
            .filter(CodeColumn::ExpiresAt.lt(now))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected)
    }
}
