pub mod admin_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use admin_use_cases::AdminUseCases;
