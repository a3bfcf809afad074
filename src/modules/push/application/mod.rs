pub mod domain;
pub mod ports;
pub mod push_use_cases;
pub mod services;

pub use push_use_cases::PushUseCases;
