use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn credentials(model: UserModel) -> UserCredentials {
        UserCredentials {
            user: model.to_repository_result(),
            password_hash: model.password_hash,
        }
    }

    async fn find_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

fn db_error(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(data.full_name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            phone: Set(data.phone),
            city: Set(data.city),
            role: Set(data.role.as_str().to_string()),
            avatar: Set(None),
            is_verified: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::EmailAlreadyExists
            } else {
                db_error(e)
            }
        })?;

        Ok(inserted.to_repository_result())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserResult>, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserResult>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(|m| m.to_repository_result()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(Self::credentials))
    }

    async fn find_credentials_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(model.map(Self::credentials))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.find_model(user_id).await?.into();

        if let Some(full_name) = data.full_name {
            active_user.full_name = Set(full_name);
        }
        if let Some(phone) = data.phone {
            active_user.phone = Set(Some(phone).filter(|p| !p.trim().is_empty()));
        }
        if let Some(city) = data.city {
            active_user.city = Set(Some(city).filter(|c| !c.trim().is_empty()));
        }
        if let Some(avatar) = data.avatar {
            active_user.avatar = Set(Some(avatar).filter(|a| !a.trim().is_empty()));
        }

        let updated = active_user.update(&*self.db).await.map_err(db_error)?;
        Ok(updated.to_repository_result())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.find_model(user_id).await?.into();
        active_user.password_hash = Set(password_hash);

        active_user.update(&*self.db).await.map_err(db_error)?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsVerified, Expr::value(true))
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
