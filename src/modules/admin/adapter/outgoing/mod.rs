pub mod admin_query_postgres;
pub mod admin_store_postgres;

pub use admin_query_postgres::AdminQueryPostgres;
pub use admin_store_postgres::AdminStorePostgres;
