use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::booking::application::domain::entities::{ServiceSnapshot, Urgency};
use crate::booking::application::ports::outgoing::BookingResult;

/// Raw booking request fields, validated by [`CreateBookingCommand::new`].
#[derive(Debug, Clone, Default)]
pub struct CreateBookingInput {
    pub artisan_id: Option<Uuid>,
    pub service: Option<ServiceSnapshot>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub urgency: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    customer_id: Uuid,
    artisan_id: Uuid,
    service: ServiceSnapshot,
    date: NaiveDate,
    time: String,
    address: String,
    description: String,
    urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBookingCommandError {
    #[error("Champs requis manquants: {0}")]
    MissingField(&'static str),

    #[error("Date invalide")]
    InvalidDate,

    #[error("Urgence inconnue")]
    InvalidUrgency,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CreateBookingCommandError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(CreateBookingCommandError::MissingField(field))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

impl CreateBookingCommand {
    pub fn new(
        customer_id: Uuid,
        input: CreateBookingInput,
    ) -> Result<Self, CreateBookingCommandError> {
        let artisan_id = input
            .artisan_id
            .ok_or(CreateBookingCommandError::MissingField("artisanId"))?;

        let service = input
            .service
            .filter(|s| !s.category.trim().is_empty() && !s.name.trim().is_empty())
            .ok_or(CreateBookingCommandError::MissingField("service"))?;

        let date = required(input.date, "date")?;
        let date = parse_date(&date).ok_or(CreateBookingCommandError::InvalidDate)?;
        let time = required(input.time, "time")?;
        let address = required(input.address, "address")?;

        let urgency = match input.urgency.as_deref().map(str::trim) {
            None | Some("") => Urgency::default(),
            Some(value) => {
                Urgency::parse(value).ok_or(CreateBookingCommandError::InvalidUrgency)?
            }
        };

        Ok(Self {
            customer_id,
            artisan_id,
            service,
            date,
            time,
            address,
            description: input.description.unwrap_or_default(),
            urgency,
        })
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn artisan_id(&self) -> Uuid {
        self.artisan_id
    }

    pub fn service(&self) -> &ServiceSnapshot {
        &self.service
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBookingError {
    #[error("Artisan not found")]
    ArtisanNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBookingUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateBookingCommand,
    ) -> Result<BookingResult, CreateBookingError>;
}
