use marketdesk::model::{EntityKind, Record, Row};
use marketdesk::store::{AppStore, StoreError};

fn product_ids(store: &AppStore) -> Vec<String> {
    store.records(EntityKind::Product).iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_fixtures_seed_every_entity() {
    let store = AppStore::with_fixtures().unwrap();
    for kind in EntityKind::ALL {
        assert!(store.count(kind) > 0, "{kind} should have fixture rows");
    }
}

#[test]
fn test_delete_removes_exactly_one_and_keeps_order() {
    let mut store = AppStore::with_fixtures().unwrap();
    let before = product_ids(&store);

    assert!(store.delete(EntityKind::Product, "PROD003"));

    let expected: Vec<String> = before.iter().filter(|id| *id != "PROD003").cloned().collect();
    assert_eq!(product_ids(&store), expected);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = AppStore::with_fixtures().unwrap();
    let before = store.records(EntityKind::Product);

    assert!(!store.delete(EntityKind::Product, "PROD999"));

    let after = store.records(EntityKind::Product);
    assert_eq!(before.len(), after.len());
    assert_eq!(&*before, &*after);
}

#[test]
fn test_snapshots_are_not_mutated_by_later_writes() {
    let mut store = AppStore::with_fixtures().unwrap();
    let snapshot = store.records(EntityKind::Vendor);

    store.delete(EntityKind::Vendor, "VEND001");
    store
        .insert(EntityKind::Vendor, Record::new().with("id", "VEND099").with("name", "Late Vendor"))
        .unwrap();

    assert!(snapshot.iter().any(|r| r.id() == "VEND001"));
    assert!(!snapshot.iter().any(|r| r.id() == "VEND099"));
}

#[test]
fn test_insert_update_and_find() {
    let mut store = AppStore::with_fixtures().unwrap();
    let id = store.next_id(EntityKind::Manufacturer);

    store
        .insert(EntityKind::Manufacturer, Record::new().with("id", id.as_str()).with("name", "Bosch"))
        .unwrap();
    assert_eq!(store.find(EntityKind::Manufacturer, &id).unwrap().text("name"), "Bosch");

    store
        .update(EntityKind::Manufacturer, Record::new().with("id", id.as_str()).with("name", "Bosch GmbH"))
        .unwrap();
    assert_eq!(store.find(EntityKind::Manufacturer, &id).unwrap().text("name"), "Bosch GmbH");

    // Updated rows stay at their position
    let last = store.records(EntityKind::Manufacturer).last().map(|r| r.id().to_string());
    assert_eq!(last.as_deref(), Some(id.as_str()));
}

#[test]
fn test_write_errors() {
    let mut store = AppStore::with_fixtures().unwrap();

    let duplicate = store.insert(EntityKind::Product, Record::new().with("id", "PROD001"));
    assert!(matches!(duplicate, Err(StoreError::DuplicateId { .. })));

    let missing = store.update(EntityKind::Product, Record::new().with("id", "PROD999"));
    assert!(matches!(missing, Err(StoreError::NotFound { .. })));

    let no_id = store.insert(EntityKind::Product, Record::new().with("name", "Nameless"));
    assert!(matches!(no_id, Err(StoreError::MissingId { .. })));
}

#[test]
fn test_find_unknown_id_is_not_found() {
    let store = AppStore::with_fixtures().unwrap();
    let err = store.find(EntityKind::Order, "ORD404").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert!(err.to_string().contains("ORD404"));
}

#[test]
fn test_next_id_follows_highest_numeric_suffix() {
    let mut store = AppStore::new();
    assert_eq!(store.next_id(EntityKind::Product), "PROD001");

    store.insert(EntityKind::Product, Record::new().with("id", "PROD007")).unwrap();
    store.insert(EntityKind::Product, Record::new().with("id", "PROD002")).unwrap();
    assert_eq!(store.next_id(EntityKind::Product), "PROD008");
}
