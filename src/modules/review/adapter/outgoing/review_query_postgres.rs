use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::review::application::ports::outgoing::{
    ReviewAuthor, ReviewQuery, ReviewQueryError, ReviewView,
};

use super::sea_orm_entity::reviews::{Column, Entity};

#[derive(Clone)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn list_for_artisan(
        &self,
        artisan_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<ReviewView>, ReviewQueryError> {
        let models = Entity::find()
            .filter(Column::ArtisanId.eq(artisan_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let authors: HashMap<Uuid, ReviewAuthor> = users::Entity::find()
            .filter(users::Column::Id.is_in(models.iter().map(|m| m.customer_id)))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ReviewAuthor {
                        id: u.id,
                        full_name: u.full_name,
                    },
                )
            })
            .collect();

        // A deleted author leaves the review visible without a name
        Ok(models
            .into_iter()
            .map(|m| ReviewView {
                customer: authors.get(&m.customer_id).cloned(),
                review: m.to_repository_result(),
            })
            .collect())
    }
}
