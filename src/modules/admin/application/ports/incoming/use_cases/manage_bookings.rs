use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::BookingPatch;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::{BookingListFilter, BookingResult, BookingView};
use crate::shared::api::{PageRequest, Paginated};

use super::admin_error::{non_blank, AdminError, AdminInputError};

fn parse_status(value: Option<String>) -> Result<Option<BookingStatus>, AdminInputError> {
    match non_blank(value) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AdminInputError::UnknownBookingStatus(s)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminBookingListQuery {
    pub filter: BookingListFilter,
    pub page: PageRequest,
}

impl AdminBookingListQuery {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        status: Option<String>,
    ) -> Result<Self, AdminInputError> {
        let status = parse_status(status.filter(|s| s != "all"))?;

        Ok(Self {
            filter: BookingListFilter {
                status,
                ..Default::default()
            },
            page: PageRequest::new(page, limit),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingPatchInput {
    pub status: Option<String>,
    pub total_price: Option<f64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<BookingPatchInput> for BookingPatch {
    type Error = AdminInputError;

    fn try_from(input: BookingPatchInput) -> Result<Self, Self::Error> {
        if input.total_price.is_some_and(|p| p < 0.0) {
            return Err(AdminInputError::NegativePrice);
        }

        let date = match non_blank(input.date) {
            None => None,
            Some(d) => Some(
                NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .map_err(|_| AdminInputError::InvalidDate)?,
            ),
        };

        Ok(BookingPatch {
            status: parse_status(input.status)?,
            total_price: input.total_price,
            date,
            time: non_blank(input.time),
            address: non_blank(input.address),
        })
    }
}

#[async_trait]
pub trait ManageBookingsUseCase: Send + Sync {
    async fn list(&self, query: AdminBookingListQuery)
        -> Result<Paginated<BookingView>, AdminError>;

    async fn update(
        &self,
        booking_id: Uuid,
        patch: BookingPatch,
    ) -> Result<BookingResult, AdminError>;

    async fn delete(&self, booking_id: Uuid) -> Result<(), AdminError>;
}
