//! Core domain logic for the user account registry.
//! This crate is the single source of truth for account records and their
//! lifecycle invariants.

pub mod capability;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use capability::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{UserId, UserProfile, UserRecord};
pub use repo::user_repo::{RepoError, RepoResult, SqliteUserRepository, UserRepository};
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
