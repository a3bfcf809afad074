use std::{fmt, str::FromStr, sync::OnceLock};

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strongly typed user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Artisan,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Artisan => "artisan",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "artisan" => Ok(Role::Artisan),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Identity and role of whoever issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

//
// ──────────────────────────────────────────────────────────
// Verification codes
// ──────────────────────────────────────────────────────────
//

pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 15;
pub const RESEND_COOLDOWN_SECONDS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationKind {
    EmailVerification,
    PasswordReset,
}

impl VerificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationKind::EmailVerification => "email_verification",
            VerificationKind::PasswordReset => "password_reset",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email_verification" => Some(VerificationKind::EmailVerification),
            "password_reset" => Some(VerificationKind::PasswordReset),
            _ => None,
        }
    }
}

/// Six random digits in 100000..=999999.
pub fn generate_verification_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

//
// ──────────────────────────────────────────────────────────
// Field rules shared by registration and profile updates
// ──────────────────────────────────────────────────────────
//

pub const MIN_PASSWORD_LENGTH: usize = 6;

fn moroccan_phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^(\+212|0)[5-7][0-9]{8}$").expect("valid phone regex"))
}

/// Accepts `+212XXXXXXXXX` or `0XXXXXXXXX` (mobile and landline), spaces ignored.
pub fn is_valid_moroccan_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    moroccan_phone_regex().is_match(&compact)
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
