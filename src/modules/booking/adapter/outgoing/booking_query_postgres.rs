use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::artisan::adapter::outgoing::sea_orm_entity::artisans;
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::booking::application::ports::outgoing::{
    BookingArtisanSummary, BookingCustomerSummary, BookingListFilter, BookingQuery,
    BookingQueryError, BookingView,
};
use crate::shared::api::PageRequest;

use super::sea_orm_entity::bookings::{Column, Entity, Model};

#[derive(Clone)]
pub struct BookingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: BookingListFilter) -> Select<Entity> {
        let mut condition = Condition::all();

        if let Some(customer_id) = filter.customer_id {
            condition = condition.add(Column::CustomerId.eq(customer_id));
        }
        if let Some(artisan_id) = filter.artisan_id {
            condition = condition.add(Column::ArtisanId.eq(artisan_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status.as_str()));
        }

        Entity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
    }

    /// Joins artisan and customer summaries onto the rows, keeping their order.
    async fn with_parties(&self, models: Vec<Model>) -> Result<Vec<BookingView>, BookingQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let artisan_rows = artisans::Entity::find()
            .filter(artisans::Column::Id.is_in(models.iter().map(|m| m.artisan_id)))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let artisan_owner: HashMap<Uuid, Uuid> = artisan_rows
            .iter()
            .map(|a| (a.id, a.user_id))
            .collect();

        let user_ids: Vec<Uuid> = models
            .iter()
            .map(|m| m.customer_id)
            .chain(artisan_owner.values().copied())
            .collect();

        let people: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let owner = artisan_owner
                    .get(&m.artisan_id)
                    .and_then(|user_id| people.get(user_id));
                let customer = people.get(&m.customer_id);

                BookingView {
                    artisan: artisan_summary(m.artisan_id, owner),
                    customer: customer_summary(m.customer_id, customer),
                    booking: m.to_repository_result(),
                }
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> BookingQueryError {
    BookingQueryError::DatabaseError(e.to_string())
}

// A removed account still leaves the booking listed, only without a name
fn artisan_summary(artisan_id: Uuid, owner: Option<&users::Model>) -> BookingArtisanSummary {
    BookingArtisanSummary {
        id: artisan_id,
        name: owner.map(|u| u.full_name.clone()).unwrap_or_default(),
        city: owner.and_then(|u| u.city.clone()),
        avatar: owner.and_then(|u| u.avatar.clone()),
    }
}

fn customer_summary(customer_id: Uuid, user: Option<&users::Model>) -> BookingCustomerSummary {
    BookingCustomerSummary {
        id: customer_id,
        name: user.map(|u| u.full_name.clone()).unwrap_or_default(),
        phone: user.and_then(|u| u.phone.clone()),
        city: user.and_then(|u| u.city.clone()),
    }
}

#[async_trait]
impl BookingQuery for BookingQueryPostgres {
    async fn list(&self, filter: BookingListFilter) -> Result<Vec<BookingView>, BookingQueryError> {
        let models = Self::filtered(filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_parties(models).await
    }

    async fn page(
        &self,
        filter: BookingListFilter,
        page: PageRequest,
    ) -> Result<(Vec<BookingView>, u64), BookingQueryError> {
        let query = Self::filtered(filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok((self.with_parties(models).await?, total))
    }
}
