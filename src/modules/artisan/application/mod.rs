pub mod artisan_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use artisan_use_cases::ArtisanUseCases;
