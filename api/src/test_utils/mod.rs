//! Test utilities
//!
//! In-memory implementations of the repository ports and test fixtures.
//!
//! The in-memory repositories honour the same contract as the PostgreSQL
//! adapters (NotFound on missing rows, Duplication on unique fields, sequence
//! restart on clear), so service and handler tests run without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
