//! FakeRecordTable contract tests
//!
//! Last write wins, reads ignore the key, indexes are unsupported.

use crate::common::*;
use proptest::prelude::*;
use recordtable::{Entity, Error, FakeRecordTable, Key, RecordTable};

fn key(value: &str) -> Key {
    Key::partition(value).unwrap()
}

fn arb_business() -> impl Strategy<Value = Business> {
    ("[A-Za-z0-9 ]{1,24}", any::<bool>()).prop_map(|(name, auto_accept)| Business {
        auto_accept_deliveries: auto_accept,
        ..Business::named(&name)
    })
}

// =============================================================================
// SCENARIO
// =============================================================================

#[test]
fn test_retrieve_replace_upsert_index_scenario() {
    init_tracing();
    let mut table = FakeRecordTable::<Business>::new();

    assert_eq!(table.get_item(&key("x")).unwrap(), None);

    let returned = table.update_item(Business::named("acme")).unwrap();
    assert_eq!(returned, Business::named("acme"));
    assert_eq!(
        table.get_item(&key("ignored-key")).unwrap(),
        Some(Business::named("acme"))
    );

    table.put_item(Business::named("beta")).unwrap();
    assert_eq!(
        table.get_item(&key("x")).unwrap(),
        Some(Business::named("beta"))
    );

    let err = table.index("byRegion").unwrap_err();
    assert!(matches!(err, Error::Unsupported { ref operation, .. } if operation.contains("byRegion")));
}

#[test]
fn test_seeded_table_serves_any_key() {
    let table = FakeRecordTable::<Business>::new().with_record(Business::named("biz"));
    assert_eq!(
        table.get_item(&key("somewhere-else")).unwrap(),
        Some(Business::named("biz"))
    );
}

#[test]
fn test_table_name_is_fixed_literal() {
    let mut table = FakeRecordTable::<Business>::new();
    assert_eq!(table.table_name(), "business");
    table.put_item(Business::named("acme")).unwrap();
    assert_eq!(table.table_name(), Business::TABLE_NAME);
}

#[test]
fn test_schema_describes_entity() {
    let table = FakeRecordTable::<Business>::new();
    let schema = table.table_schema();
    assert_eq!(schema.partition_key().name, "name");
    assert_eq!(
        schema.attribute_names(),
        vec!["name", "publicId", "emailAdmin", "state", "autoAcceptDeliveries"]
    );

    let item = schema.item_to_map(&Business::named("acme")).unwrap();
    assert_eq!(item.get("name").and_then(|v| v.as_str()), Some("acme"));
    assert_eq!(item.get("state").and_then(|v| v.as_str()), Some("APPROVED"));
}

#[test]
fn test_derived_key_from_name() {
    let table = FakeRecordTable::<Business>::new();
    assert_eq!(table.key_from(&Business::named("acme")).unwrap(), key("acme"));

    let nameless = Business {
        name: None,
        ..Business::named("acme")
    };
    assert!(matches!(
        table.key_from(&nameless),
        Err(Error::MissingKeyAttribute { .. })
    ));
}

#[test]
fn test_lookup_by_record_never_fails() {
    let table = FakeRecordTable::<Business>::new().with_record(Business::named("acme"));
    let nameless = Business {
        name: None,
        ..Business::named("other")
    };
    let long_name = Business::named(&"n".repeat(3000));

    assert_eq!(table.get_item_for(&nameless).unwrap(), Some(Business::named("acme")));
    assert_eq!(table.get_item_for(&long_name).unwrap(), Some(Business::named("acme")));
}

#[test]
fn test_take_then_get_is_none() {
    let mut table = FakeRecordTable::<Business>::new().with_record(Business::named("acme"));
    assert_eq!(table.take(), Some(Business::named("acme")));
    assert_eq!(table.get_item(&key("acme")).unwrap(), None);
}

#[test]
fn test_composite_key_entity() {
    let profile = UserBusinessProfile {
        email: "ada@example.com".to_string(),
        business: "intrale".to_string(),
        profile: "SALER".to_string(),
        state: BusinessState::Pending,
    };
    let mut table = FakeRecordTable::<UserBusinessProfile>::new();
    table.put_item(profile.clone()).unwrap();

    assert_eq!(table.table_name(), "userbusinessprofile");
    assert_eq!(
        table.key_from(&profile).unwrap(),
        key("ada@example.com#intrale#SALER")
    );
    assert_eq!(table.get_item(&key("x")).unwrap(), Some(profile));
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_update_then_get_any_key(b in arb_business(), k in "\\PC{0,32}") {
        let mut table = FakeRecordTable::<Business>::new();
        table.update_item(b.clone()).unwrap();
        prop_assert_eq!(table.get_item(&key(&k)).unwrap(), Some(b));
    }

    #[test]
    fn prop_put_then_get_any_key(b in arb_business(), k in "\\PC{0,32}") {
        let mut table = FakeRecordTable::<Business>::new();
        table.put_item(b.clone()).unwrap();
        prop_assert_eq!(table.get_item(&key(&k)).unwrap(), Some(b));
    }

    #[test]
    fn prop_last_write_wins(b1 in arb_business(), b2 in arb_business(), k in "\\PC{0,32}") {
        let mut table = FakeRecordTable::<Business>::new();
        table.update_item(b1).unwrap();
        table.update_item(b2.clone()).unwrap();
        prop_assert_eq!(table.get_item(&key(&k)).unwrap(), Some(b2));
    }

    #[test]
    fn prop_get_before_store_is_none(k in "\\PC{0,32}") {
        let table = FakeRecordTable::<Business>::new();
        prop_assert_eq!(table.get_item(&key(&k)).unwrap(), None);
    }

    #[test]
    fn prop_index_always_unsupported(name in "\\PC{0,32}") {
        let table = FakeRecordTable::<Business>::new();
        let unsupported = matches!(table.index(&name), Err(Error::Unsupported { .. }));
        prop_assert!(unsupported);
    }

    #[test]
    fn prop_get_item_for_any_record_returns_held(held in arb_business(), asked in arb_business()) {
        let table = FakeRecordTable::<Business>::new().with_record(held.clone());
        prop_assert_eq!(table.get_item_for(&asked).unwrap(), Some(held));
    }

    #[test]
    fn prop_table_name_independent_of_state(b in arb_business()) {
        let mut table = FakeRecordTable::<Business>::new();
        let before = table.table_name().to_string();
        table.put_item(b).unwrap();
        prop_assert_eq!(table.table_name(), before.as_str());
    }
}
