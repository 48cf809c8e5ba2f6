//! User account use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for external callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::user::{UserProfile, UserRecord};
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case service wrapper for the five user-store operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored record in the store's natural key order.
    pub fn list_users(&self) -> RepoResult<Vec<UserRecord>> {
        self.repo.list_users()
    }

    /// Gets one record by stable ID.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn get_user(&self, id: &str) -> RepoResult<UserRecord> {
        self.repo.get_user(id)
    }

    /// Creates a new account record from a caller payload.
    ///
    /// # Contract
    /// - The store allocates the id; the payload never carries one.
    /// - Returns the full stored record including its generated id.
    pub fn create_user(&self, profile: &UserProfile) -> RepoResult<UserRecord> {
        self.repo.create_user(profile)
    }

    /// Replaces an existing record's profile fields by stable ID.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_user(&self, id: &str, profile: &UserProfile) -> RepoResult<UserRecord> {
        self.repo.update_user(id, profile)
    }

    /// Permanently removes a record by stable ID, returning its last version.
    pub fn delete_user(&self, id: &str) -> RepoResult<UserRecord> {
        self.repo.delete_user(id)
    }
}
