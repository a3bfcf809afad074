use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    artisan::application::domain::entities::{
        category_label, ServiceOffering, DEFAULT_SERVICE_PRICE,
    },
    auth::application::{
        domain::entities::{
            is_valid_moroccan_phone, normalize_email, Role, MIN_PASSWORD_LENGTH,
        },
        ports::outgoing::UserResult,
    },
};

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

/// A service picked at sign-up: a bare category key or a detailed entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServiceSelection {
    Key(String),
    Detailed {
        category: String,
        name: Option<String>,
        price: Option<String>,
    },
}

impl ServiceSelection {
    pub fn into_offering(self) -> ServiceOffering {
        match self {
            ServiceSelection::Key(key) => ServiceOffering::from_category_key(&key),
            ServiceSelection::Detailed {
                category,
                name,
                price,
            } => ServiceOffering {
                name: name.unwrap_or_else(|| category_label(&category).to_string()),
                price: price.unwrap_or_else(|| DEFAULT_SERVICE_PRICE.to_string()),
                category,
                description: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    full_name: String,
    email: String,
    password: String,
    phone: Option<String>,
    city: Option<String>,
    role: Role,
    bio: String,
    experience: i32,
    services: Vec<ServiceOffering>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid Moroccan phone number")]
    InvalidPhone,

    #[error("Role must be customer or artisan")]
    InvalidRole,
}

impl RegisterUserCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        email: String,
        password: String,
        phone: Option<String>,
        city: Option<String>,
        role: Option<String>,
        bio: Option<String>,
        experience: Option<i32>,
        services: Option<Vec<ServiceSelection>>,
    ) -> Result<Self, RegisterUserCommandError> {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegisterUserCommandError::EmptyFullName);
        }

        let email = normalize_email(&email);
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        let phone = phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        if let Some(phone) = &phone {
            if !is_valid_moroccan_phone(phone) {
                return Err(RegisterUserCommandError::InvalidPhone);
            }
        }

        // Admin accounts are never self-registered
        let role = match role.as_deref().map(str::trim) {
            None | Some("") => Role::Customer,
            Some(value) => match value.parse::<Role>() {
                Ok(Role::Admin) | Err(_) => return Err(RegisterUserCommandError::InvalidRole),
                Ok(role) => role,
            },
        };

        let services = services
            .unwrap_or_default()
            .into_iter()
            .map(ServiceSelection::into_offering)
            .collect();

        Ok(Self {
            full_name,
            email,
            password,
            phone,
            city: city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            role,
            bio: bio.unwrap_or_default(),
            experience: experience.unwrap_or(0).max(0),
            services,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phone(&self) -> Option<&String> {
        self.phone.as_ref()
    }

    pub fn city(&self) -> Option<&String> {
        self.city.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }
}

//
// ──────────────────────────────────────────────────────────
// Result & Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResult {
    pub user: UserResult,
    pub token: String,
    pub requires_verification: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisterUserResult, RegisterUserError>;
}
