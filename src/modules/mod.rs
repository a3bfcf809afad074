pub mod admin;
pub mod artisan;
pub mod auth;
pub mod booking;
pub mod email;
pub mod notification;
pub mod payment;
pub mod push;
pub mod review;
