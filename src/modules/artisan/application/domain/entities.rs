use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_PRICE: &str = "150-300 MAD/h";
pub const DEFAULT_RESPONSE_TIME: &str = "< 1 heure";

/// French display label for a service category key. Unknown keys map to themselves.
pub fn category_label(key: &str) -> &str {
    match key {
        "plumbing" => "Plomberie",
        "electrical" => "Électricité",
        "carpentry" => "Menuiserie",
        "painting" => "Peinture",
        "hvac" => "Climatisation",
        "cleaning" => "Nettoyage",
        "gardening" => "Jardinage",
        "masonry" => "Maçonnerie",
        "locksmith" => "Serrurerie",
        "appliance" => "Électroménager",
        "moving" => "Déménagement",
        "other" => "Autre",
        unknown => unknown,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub category: String,
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceOffering {
    /// Builds the offering registered for a bare category key.
    pub fn from_category_key(key: &str) -> Self {
        Self {
            category: key.to_string(),
            name: category_label(key).to_string(),
            price: DEFAULT_SERVICE_PRICE.to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub image: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for Availability {
    fn default() -> Self {
        let weekday = || "08:00 - 18:00".to_string();
        Self {
            monday: weekday(),
            tuesday: weekday(),
            wednesday: weekday(),
            thursday: weekday(),
            friday: weekday(),
            saturday: "09:00 - 14:00".to_string(),
            sunday: "Fermé".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }
}
