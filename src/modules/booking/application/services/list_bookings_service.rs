use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::artisan::application::ports::outgoing::ArtisanRepository;
use crate::auth::application::domain::entities::Role;
use crate::booking::application::ports::incoming::use_cases::{
    ListBookingsError, ListBookingsQuery, ListBookingsUseCase,
};
use crate::booking::application::ports::outgoing::{BookingListFilter, BookingQuery, BookingView};

pub struct ListBookingsService<Q>
where
    Q: BookingQuery,
{
    query: Q,
    artisans: Arc<dyn ArtisanRepository>,
}

impl<Q> ListBookingsService<Q>
where
    Q: BookingQuery,
{
    pub fn new(query: Q, artisans: Arc<dyn ArtisanRepository>) -> Self {
        Self { query, artisans }
    }
}

#[async_trait]
impl<Q> ListBookingsUseCase for ListBookingsService<Q>
where
    Q: BookingQuery,
{
    async fn execute(
        &self,
        query: ListBookingsQuery,
    ) -> Result<Vec<BookingView>, ListBookingsError> {
        let caller = query.caller();
        let mut filter = BookingListFilter {
            status: query.status(),
            ..Default::default()
        };

        match caller.role {
            Role::Customer => filter.customer_id = Some(caller.user_id),
            Role::Artisan => {
                let profile = self
                    .artisans
                    .find_by_user_id(caller.user_id)
                    .await
                    .map_err(|e| ListBookingsError::RepositoryError(e.to_string()))?;
                match profile {
                    Some(artisan) => filter.artisan_id = Some(artisan.id),
                    None => return Ok(Vec::new()),
                }
            }
            Role::Admin => {}
        }

        self.query.list(filter).await.map_err(|e| {
            error!(user_id = %caller.user_id, error = %e, "Failed to list bookings");
            ListBookingsError::RepositoryError(e.to_string())
        })
    }
}
