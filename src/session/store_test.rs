use super::*;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

fn session() -> Session {
    Session {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        member_id: 7,
        team_id: 3,
        team_name: "bamboo".to_owned(),
    }
}

// =============================================================
// Round-trip
// =============================================================

#[test]
fn write_then_read_round_trips() {
    let store = store();
    store.write(&session());
    assert_eq!(store.read(), Some(session()));
}

#[test]
fn write_overwrites_previous_session() {
    let store = store();
    store.write(&session());
    let replacement = Session {
        access_token: "access-2".to_owned(),
        ..session()
    };
    store.write(&replacement);
    assert_eq!(store.read(), Some(replacement));
}

#[test]
fn identity_bundle_is_camel_case_on_disk() {
    let store = store();
    store.write(&session());
    let raw = store.backend().get(USER_INFO_KEY).unwrap();
    assert!(raw.contains("\"memberId\":7"), "raw bundle: {raw}");
    assert!(raw.contains("\"teamName\":\"bamboo\""), "raw bundle: {raw}");
}

// =============================================================
// Presence check
// =============================================================

#[test]
fn has_session_false_on_empty_store() {
    assert!(!store().has_session());
}

#[test]
fn has_session_true_after_write() {
    let store = store();
    store.write(&session());
    assert!(store.has_session());
}

#[test]
fn has_session_false_for_empty_token() {
    let store = store();
    store.backend().set(TOKEN_KEY, "");
    assert!(!store.has_session());
}

#[test]
fn access_token_reads_back_the_bearer() {
    let store = store();
    store.write(&session());
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_is_idempotent() {
    let store = store();
    store.write(&session());
    store.clear();
    assert!(!store.has_session());
    store.clear();
    assert!(!store.has_session());
    assert_eq!(store.read(), None);
}

// =============================================================
// Self-heal on corruption
// =============================================================

#[test]
fn corrupt_identity_bundle_reads_absent_and_clears_all() {
    let store = store();
    store.write(&session());
    store.backend().set(USER_INFO_KEY, "not json {");

    assert_eq!(store.read(), None);
    assert!(store.backend().get(TOKEN_KEY).is_none());
    assert!(store.backend().get(REFRESH_TOKEN_KEY).is_none());
    assert!(store.backend().get(USER_INFO_KEY).is_none());
}

#[test]
fn token_without_identity_reads_absent_and_clears() {
    let store = store();
    store.backend().set(TOKEN_KEY, "orphan-token");
    store.backend().set(REFRESH_TOKEN_KEY, "orphan-refresh");

    assert_eq!(store.read(), None);
    assert!(!store.has_session());
}

#[test]
fn identity_without_token_reads_absent_and_clears() {
    let store = store();
    store
        .backend()
        .set(USER_INFO_KEY, r#"{"memberId":1,"teamId":2,"teamName":"x"}"#);

    assert_eq!(store.read(), None);
    assert!(store.backend().get(USER_INFO_KEY).is_none());
}
