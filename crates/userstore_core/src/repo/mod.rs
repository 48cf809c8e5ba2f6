//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the user-store data access contract.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Every mutation is atomic per record: fully applied or not at all.

pub mod user_repo;
