use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = ParticipantId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = ExpenseId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
    assert_eq!(ExpenseId::from(uuid), id);
}

#[test]
fn test_typed_id_display() {
    let uuid = Uuid::new_v4();
    let id = ParticipantId::from_uuid(uuid);
    assert_eq!(format!("{id}"), uuid.to_string());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = ParticipantId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
    assert!(ParticipantId::from_str("invalid").is_err());
}

#[test]
fn test_typed_id_ordering_follows_uuid() {
    let low = ParticipantId::from_uuid(Uuid::from_u128(1));
    let high = ParticipantId::from_uuid(Uuid::from_u128(2));
    assert!(low < high);
    assert_eq!(low.max(high), high);
}
