//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep external request-handling layers decoupled from storage details.

pub mod user_service;
