//! Application layer
//!
//! Domain services sitting between the HTTP handlers and the repository
//! ports. They decide create versus update and check that an update target
//! exists before delegating the write.

pub mod pos_service;
pub mod user_service;

pub use pos_service::PosService;
pub use user_service::UserService;
