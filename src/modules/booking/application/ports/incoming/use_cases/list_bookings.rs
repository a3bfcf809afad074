use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::booking::application::domain::entities::BookingStatus;
use crate::booking::application::ports::outgoing::BookingView;

#[derive(Debug, Clone, Copy)]
pub struct ListBookingsQuery {
    caller: Caller,
    status: Option<BookingStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListBookingsQueryError {
    #[error("Statut inconnu: {0}")]
    UnknownStatus(String),
}

impl ListBookingsQuery {
    /// `status` of `all` or empty means no filter.
    pub fn new(caller: Caller, status: Option<String>) -> Result<Self, ListBookingsQueryError> {
        let status = match status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(value) => Some(
                value
                    .parse::<BookingStatus>()
                    .map_err(|_| ListBookingsQueryError::UnknownStatus(value.to_string()))?,
            ),
        };

        Ok(Self { caller, status })
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }

    pub fn status(&self) -> Option<BookingStatus> {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBookingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListBookingsUseCase: Send + Sync {
    async fn execute(&self, query: ListBookingsQuery) -> Result<Vec<BookingView>, ListBookingsError>;
}
