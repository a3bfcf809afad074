pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_repository_postgres;
pub mod verification_code_repository_postgres;
