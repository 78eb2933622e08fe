use super::*;

#[test]
fn get_missing_key_is_none() {
    assert!(get("storage-test-missing").is_none());
}

#[test]
fn set_then_get_round_trips() {
    set("storage-test-key", "value-1");
    assert_eq!(get("storage-test-key").as_deref(), Some("value-1"));

    set("storage-test-key", "value-2");
    assert_eq!(get("storage-test-key").as_deref(), Some("value-2"));
}

#[test]
fn remove_clears_entry() {
    set("storage-test-remove", "v");
    remove("storage-test-remove");
    assert!(get("storage-test-remove").is_none());

    // Removing an absent key is a no-op.
    remove("storage-test-remove");
    assert!(get("storage-test-remove").is_none());
}
