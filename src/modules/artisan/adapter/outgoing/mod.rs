pub mod artisan_query_postgres;
pub mod artisan_repository_postgres;
pub mod sea_orm_entity;

pub use artisan_query_postgres::ArtisanQueryPostgres;
pub use artisan_repository_postgres::ArtisanRepositoryPostgres;
