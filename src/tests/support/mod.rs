pub mod admin_mocks;
pub mod app_state_builder;
pub mod auth_helper;
pub mod fakes;
pub mod stubs;

