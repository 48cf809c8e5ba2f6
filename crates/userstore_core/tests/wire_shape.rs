use serde_json::{json, Value};
use userstore_core::{UserProfile, UserRecord};

#[test]
fn record_serializes_with_external_field_names() {
    let record = UserRecord {
        id: "u-1".to_string(),
        pseudo: "jdoe".to_string(),
        user_name: "John Doe".to_string(),
        avatar_url: "http://x/a.png".to_string(),
        referral_id: Some("ref-1".to_string()),
        created_at: 1_000,
        updated_at: 2_000,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "u-1",
            "pseudo": "jdoe",
            "userName": "John Doe",
            "avatarURL": "http://x/a.png",
            "referralId": "ref-1",
            "createdAt": 1_000,
            "updatedAt": 2_000,
        })
    );
}

#[test]
fn absent_referral_is_omitted_not_null() {
    let record = UserRecord {
        id: "u-1".to_string(),
        pseudo: "jdoe".to_string(),
        user_name: "John Doe".to_string(),
        avatar_url: "http://x/a.png".to_string(),
        referral_id: None,
        created_at: 1_000,
        updated_at: 1_000,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("referralId").is_none());
}

#[test]
fn profile_deserializes_with_and_without_referral() {
    let with_referral: UserProfile = serde_json::from_value(json!({
        "pseudo": "jd",
        "userName": "John Doe",
        "avatarURL": "http://x/a.png",
        "referralId": "ref-1",
    }))
    .unwrap();
    assert_eq!(with_referral.referral_id.as_deref(), Some("ref-1"));

    let without_referral: UserProfile = serde_json::from_value(json!({
        "pseudo": "jd",
        "userName": "John Doe",
        "avatarURL": "http://x/a.png",
    }))
    .unwrap();
    assert_eq!(without_referral.referral_id, None);

    let round_tripped: Value = serde_json::to_value(&without_referral).unwrap();
    assert!(round_tripped.get("referralId").is_none());
}
