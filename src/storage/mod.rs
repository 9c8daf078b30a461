pub mod database;
pub mod models;
pub mod queries;

pub use database::{init_database, with_db};
pub use models::*;
pub use queries::*;
