use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::artisan::application::ports::outgoing::{
    ArtisanListFilter, ArtisanOwnerSummary, ArtisanQuery, ArtisanQueryError, ArtisanView,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users;

use super::sea_orm_entity::artisans::{self, Column, Entity};

#[derive(Clone)]
pub struct ArtisanQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArtisanQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn user_ids_where(&self, condition: Condition) -> Result<Vec<Uuid>, ArtisanQueryError> {
        users::Entity::find()
            .filter(condition)
            .select_only()
            .column(users::Column::Id)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn owners(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, ArtisanOwnerSummary>, ArtisanQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let owners = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owners
            .into_iter()
            .map(|user| (user.id, owner_summary(user)))
            .collect())
    }
}

#[async_trait]
impl ArtisanQuery for ArtisanQueryPostgres {
    async fn list(
        &self,
        filter: ArtisanListFilter,
    ) -> Result<Vec<ArtisanView>, ArtisanQueryError> {
        let mut query = Entity::find();

        // services is a JSONB array of {category, name, price}
        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            let needle = serde_json::json!([{ "category": category }]).to_string();
            query = query.filter(Expr::cust_with_values("services @> ?::jsonb", [needle]));
        }

        if let Some(min_rating) = filter.min_rating {
            query = query.filter(Column::Rating.gte(min_rating));
        }

        if filter.available_only {
            query = query.filter(Column::IsAvailable.eq(true));
        }

        if let Some(city) = filter.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            let in_city = self
                .user_ids_where(
                    Condition::all().add(Expr::col(users::Column::City).ilike(format!("%{city}%"))),
                )
                .await?;
            query = query.filter(Column::UserId.is_in(in_city));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            let matching_names = self
                .user_ids_where(
                    Condition::all().add(Expr::col(users::Column::FullName).ilike(&pattern)),
                )
                .await?;
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Bio).ilike(&pattern))
                    .add(Column::UserId.is_in(matching_names)),
            );
        }

        let models = query
            .order_by_desc(Column::Rating)
            .order_by_desc(Column::TotalReviews)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut owners = self.owners(models.iter().map(|m| m.user_id).collect()).await?;

        // An artisan row whose user vanished is skipped rather than failing the whole page
        Ok(models
            .into_iter()
            .filter_map(|model| {
                owners.remove(&model.user_id).map(|user| ArtisanView {
                    artisan: model.to_repository_result(),
                    user,
                })
            })
            .collect())
    }

    async fn find_view(
        &self,
        artisan_id: Uuid,
    ) -> Result<Option<ArtisanView>, ArtisanQueryError> {
        let Some(model) = Entity::find_by_id(artisan_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let owner = users::Entity::find_by_id(model.user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owner.map(|user| view(model, user)))
    }
}

fn owner_summary(user: users::Model) -> ArtisanOwnerSummary {
    ArtisanOwnerSummary {
        id: user.id,
        full_name: user.full_name,
        city: user.city,
        phone: user.phone,
        avatar: user.avatar,
        is_verified: user.is_verified,
    }
}

fn view(model: artisans::Model, user: users::Model) -> ArtisanView {
    ArtisanView {
        artisan: model.to_repository_result(),
        user: owner_summary(user),
    }
}

fn map_db_err(e: DbErr) -> ArtisanQueryError {
    ArtisanQueryError::DatabaseError(e.to_string())
}
