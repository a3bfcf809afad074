use async_trait::async_trait;
use serde::Serialize;

use crate::admin::application::domain::entities::ExportKind;

use super::{AdminError, AdminInputError};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserExportRow {
    #[serde(rename = "Nom Complet")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Téléphone")]
    pub phone: String,
    #[serde(rename = "Ville")]
    pub city: String,
    #[serde(rename = "Rôle")]
    pub role: String,
    #[serde(rename = "Vérifié")]
    pub verified: String,
    #[serde(rename = "Date Inscription")]
    pub registered_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtisanExportRow {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Téléphone")]
    pub phone: String,
    #[serde(rename = "Ville")]
    pub city: String,
    #[serde(rename = "Note")]
    pub rating: String,
    #[serde(rename = "Avis")]
    pub reviews: i32,
    #[serde(rename = "Travaux Complétés")]
    pub completed_jobs: i32,
    #[serde(rename = "Disponible")]
    pub available: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingExportRow {
    #[serde(rename = "Client")]
    pub customer: String,
    #[serde(rename = "Email Client")]
    pub customer_email: String,
    #[serde(rename = "Artisan")]
    pub artisan: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Heure")]
    pub time: String,
    #[serde(rename = "Adresse")]
    pub address: String,
    #[serde(rename = "Prix")]
    pub price: String,
    #[serde(rename = "Statut")]
    pub status: String,
    #[serde(rename = "Date Création")]
    pub created_on: String,
}

/// Only the sections requested are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserExportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artisans: Option<Vec<ArtisanExportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingExportRow>>,
}

/// Missing or empty means everything.
pub fn parse_export_kind(value: Option<&str>) -> Result<ExportKind, AdminInputError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(ExportKind::All),
        Some(v) => ExportKind::parse(v).ok_or_else(|| AdminInputError::UnknownExportKind(v.into())),
    }
}

#[async_trait]
pub trait ExportUseCase: Send + Sync {
    async fn execute(&self, kind: ExportKind) -> Result<ExportData, AdminError>;
}
