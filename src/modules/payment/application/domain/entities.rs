use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_CURRENCY: &str = "MAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Cmi,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Cmi => "cmi",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "paypal" => Some(PaymentMethod::Paypal),
            "cmi" => Some(PaymentMethod::Cmi),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

fn amount_regex() -> &'static Regex {
    static AMOUNT: OnceLock<Regex> = OnceLock::new();
    AMOUNT.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("valid amount regex"))
}

/// First decimal number in a free-form price such as `"150-300 MAD/h"`.
///
/// A range is charged at its lower bound (`150`). Stripping every non-digit
/// instead would glue the bounds together into `150300`.
pub fn parse_amount(price: &str) -> Option<f64> {
    amount_regex()
        .find(price)
        .and_then(|m| m.as_str().replace(',', ".").parse().ok())
}
