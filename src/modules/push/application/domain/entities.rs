use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Serialize;

pub const DEFAULT_ICON: &str = "/icon-192x192.png";
pub const DEFAULT_BADGE: &str = "/icon-72x72.png";

/// JSON body delivered to the service worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub data: serde_json::Value,
}

impl PushPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: DEFAULT_ICON.to_string(),
            badge: DEFAULT_BADGE.to_string(),
            tag: format!("fi-khidmatik-{}", Utc::now().timestamp_millis()),
            data: serde_json::json!({}),
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Outcome of a fan-out to every subscription of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub success: bool,
    pub sent: usize,
    pub failed: usize,
}

impl DeliveryReport {
    pub fn empty() -> Self {
        Self {
            success: true,
            sent: 0,
            failed: 0,
        }
    }
}

/// Browser keys are URL-safe base64, padded or not.
pub fn is_url_safe_base64(value: &str) -> bool {
    let trimmed = value.trim_end_matches('=');
    !trimmed.is_empty() && URL_SAFE_NO_PAD.decode(trimmed).is_ok()
}
