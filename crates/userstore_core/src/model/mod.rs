//! Domain model for user account records.
//!
//! # Responsibility
//! - Define the canonical account record and its caller-supplied payload.
//! - Keep store-managed fields (id, timestamps) out of caller payloads.
//!
//! # Invariants
//! - Every record is identified by a stable `UserId` assigned at creation.
//! - Deletion is permanent; there is no tombstone state in the model.

pub mod user;
