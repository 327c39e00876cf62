//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod constraints;
pub mod migrations;
pub mod pos_repo;
pub mod user_repo;


pub use migrations::run_migrations;
pub use pos_repo::PostgresPosRepository;
pub use user_repo::PostgresUserRepository;
