//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five store operations over canonical `users` storage.
//! - Own id allocation and timestamp stamping via injected capabilities.
//!
//! # Invariants
//! - `id` and `created_at` are written once at creation and never mutated.
//! - Update fully replaces the caller-editable fields, including clearing
//!   `referral_id` when the payload omits it.
//! - Delete is permanent; there is no tombstone state.

use crate::capability::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
use crate::db::DbError;
use crate::model::user::{UserId, UserProfile, UserRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT
    id,
    pseudo,
    user_name,
    avatar_url,
    referral_id,
    created_at,
    updated_at
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(UserId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the five user-store operations.
///
/// `list_users` and `create_user` have no domain failure path; their only
/// errors are storage transport failures. The remaining operations fail with
/// `RepoError::NotFound` when the id has no current record.
pub trait UserRepository {
    fn list_users(&self) -> RepoResult<Vec<UserRecord>>;
    fn get_user(&self, id: &str) -> RepoResult<UserRecord>;
    fn create_user(&self, profile: &UserProfile) -> RepoResult<UserRecord>;
    fn update_user(&self, id: &str, profile: &UserProfile) -> RepoResult<UserRecord>;
    fn delete_user(&self, id: &str) -> RepoResult<UserRecord>;
}

/// SQLite-backed user repository.
///
/// Holds its `Clock` and `IdGenerator` capabilities for the store lifetime;
/// both are consulted fresh on every stamping operation, never cached.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Creates a repository with the system clock and UUID id generation.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_capabilities(conn, Box::new(SystemClock), Box::new(UuidIdGenerator))
    }

    /// Creates a repository with caller-provided capabilities.
    ///
    /// Tests use this to inject deterministic clocks and id sequences.
    pub fn with_capabilities(
        conn: &'conn Connection,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self { conn, clock, ids }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn list_users(&self) -> RepoResult<Vec<UserRecord>> {
        // Primary-key order: stable and deterministic for a given store
        // state, independent of insertion order.
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_user_row(row)?);
        }

        Ok(records)
    }

    fn get_user(&self, id: &str) -> RepoResult<UserRecord> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => parse_user_row(row),
            None => Err(RepoError::NotFound(id.to_string())),
        }
    }

    fn create_user(&self, profile: &UserProfile) -> RepoResult<UserRecord> {
        let record = UserRecord::new(self.ids.next_id(), profile, self.clock.now_epoch_ms());

        // A duplicate id would mean a broken generator; the primary-key
        // constraint rejects the insert and the violation surfaces as a
        // storage error rather than overwriting an existing record.
        self.conn.execute(
            "INSERT INTO users (
                id,
                pseudo,
                user_name,
                avatar_url,
                referral_id,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                record.id.as_str(),
                record.pseudo.as_str(),
                record.user_name.as_str(),
                record.avatar_url.as_str(),
                record.referral_id.as_deref(),
                record.created_at,
                record.updated_at,
            ],
        )?;

        Ok(record)
    }

    fn update_user(&self, id: &str, profile: &UserProfile) -> RepoResult<UserRecord> {
        let mut record = self.get_user(id)?;
        record.apply_profile(profile, self.clock.now_epoch_ms());

        let changed = self.conn.execute(
            "UPDATE users
             SET
                pseudo = ?1,
                user_name = ?2,
                avatar_url = ?3,
                referral_id = ?4,
                updated_at = ?5
             WHERE id = ?6;",
            params![
                record.pseudo.as_str(),
                record.user_name.as_str(),
                record.avatar_url.as_str(),
                record.referral_id.as_deref(),
                record.updated_at,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(record)
    }

    fn delete_user(&self, id: &str) -> RepoResult<UserRecord> {
        let record = self.get_user(id)?;

        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(record)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<UserRecord> {
    Ok(UserRecord {
        id: row.get("id")?,
        pseudo: row.get("pseudo")?,
        user_name: row.get("user_name")?,
        avatar_url: row.get("avatar_url")?,
        referral_id: row.get("referral_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
