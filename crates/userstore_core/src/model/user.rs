//! User account domain model.
//!
//! # Responsibility
//! - Define the canonical persisted account record.
//! - Provide lifecycle helpers for creation and full-profile replacement.
//!
//! # Invariants
//! - `id` is assigned by the store at creation and never changes afterwards.
//! - `created_at <= updated_at` holds for every record.
//! - An absent `referral_id` is `None`, never an empty-string sentinel.

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// value is opaque to the store; uniqueness is guaranteed by the id generator
/// that produced it.
pub type UserId = String;

/// Caller-supplied profile payload for create and update.
///
/// Create and update accept the same shape: no `id`, no timestamps. Those
/// fields are store-managed and never taken from the caller. Field contents
/// are accepted verbatim; empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display handle shown to other users.
    pub pseudo: String,
    /// Account name.
    pub user_name: String,
    /// URL reference to the account avatar image.
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    /// Referral marker, present only for accounts created via referral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
}

/// Canonical persisted account record.
///
/// Serialized field names follow the external schema (`userName`,
/// `avatarURL`, `referralId`, `createdAt`, `updatedAt`); `referralId` is
/// omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable global ID used for lookups and auditing.
    pub id: UserId,
    /// Display handle shown to other users.
    pub pseudo: String,
    /// Account name.
    pub user_name: String,
    /// URL reference to the account avatar image.
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    /// Referral marker, present only for accounts created via referral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every successful update.
    pub updated_at: i64,
}

impl UserRecord {
    /// Builds a freshly created record from a caller payload.
    ///
    /// # Invariants
    /// - `created_at == updated_at == now_epoch_ms`.
    /// - Payload fields are copied verbatim, including an absent
    ///   `referral_id`.
    pub fn new(id: UserId, profile: &UserProfile, now_epoch_ms: i64) -> Self {
        Self {
            id,
            pseudo: profile.pseudo.clone(),
            user_name: profile.user_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            referral_id: profile.referral_id.clone(),
            created_at: now_epoch_ms,
            updated_at: now_epoch_ms,
        }
    }

    /// Replaces every caller-editable field with the payload's values.
    ///
    /// This is a full replace, not a sparse patch: an absent `referral_id`
    /// in the payload clears any stored value. `id` and `created_at` are
    /// untouched.
    pub fn apply_profile(&mut self, profile: &UserProfile, now_epoch_ms: i64) {
        self.pseudo = profile.pseudo.clone();
        self.user_name = profile.user_name.clone();
        self.avatar_url = profile.avatar_url.clone();
        self.referral_id = profile.referral_id.clone();
        self.updated_at = now_epoch_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::{UserProfile, UserRecord};

    fn sample_profile() -> UserProfile {
        UserProfile {
            pseudo: "jdoe".to_string(),
            user_name: "John Doe".to_string(),
            avatar_url: "http://x/a.png".to_string(),
            referral_id: None,
        }
    }

    #[test]
    fn new_record_stamps_both_timestamps_equally() {
        let record = UserRecord::new("u-1".to_string(), &sample_profile(), 1_000);
        assert_eq!(record.created_at, 1_000);
        assert_eq!(record.updated_at, 1_000);
        assert_eq!(record.referral_id, None);
    }

    #[test]
    fn apply_profile_replaces_fields_and_keeps_identity() {
        let mut record = UserRecord::new("u-1".to_string(), &sample_profile(), 1_000);
        let replacement = UserProfile {
            pseudo: "jd".to_string(),
            referral_id: Some("ref-1".to_string()),
            ..sample_profile()
        };

        record.apply_profile(&replacement, 2_000);

        assert_eq!(record.id, "u-1");
        assert_eq!(record.created_at, 1_000);
        assert_eq!(record.updated_at, 2_000);
        assert_eq!(record.pseudo, "jd");
        assert_eq!(record.referral_id.as_deref(), Some("ref-1"));
    }

    #[test]
    fn apply_profile_clears_absent_referral() {
        let with_referral = UserProfile {
            referral_id: Some("ref-1".to_string()),
            ..sample_profile()
        };
        let mut record = UserRecord::new("u-1".to_string(), &with_referral, 1_000);

        record.apply_profile(&sample_profile(), 2_000);

        assert_eq!(record.referral_id, None);
    }
}
