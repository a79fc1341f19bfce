//! JSON 저장 문서 입출력 테스트.
use std::fs;

use unit_converter::category::Category;
use unit_converter::favorites::{FavoriteError, FavoriteInput};
use unit_converter::id::EntryId;
use unit_converter::store::{JsonFileStorage, MemoryStorage, Store};

fn input(value: &str, unit: &str) -> FavoriteInput {
    FavoriteInput {
        value: value.to_string(),
        unit: unit.to_string(),
        label: unit.to_string(),
    }
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("data.json");

    let mut store = Store::open(JsonFileStorage::new(&path));
    store.add_history("1", "m", "0.001", "km", Category::Length);
    store.record_quick("m", "km", Category::Length);
    store
        .add_favorite(Category::Length, [input("1", "m"), input("0.001", "km")])
        .expect("favorite");
    store.flush().expect("flush");
    let saved = store.document().clone();

    let reopened = Store::open(JsonFileStorage::new(&path));
    assert_eq!(reopened.document(), &saved);
    assert_eq!(reopened.history().len(), 1);
    assert_eq!(reopened.favorites().len(), 1);
}

#[test]
fn document_uses_camel_case_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");

    let mut store = Store::open(JsonFileStorage::new(&path));
    store.add_history("1", "kg", "2.2046", "lb", Category::Weight);
    store.record_quick("kg", "lb", Category::Weight);

    let json = fs::read_to_string(&path).expect("read");
    assert!(json.contains("\"quickConversions\""));
    assert!(json.contains("\"fromValue\""));
    assert!(json.contains("\"toUnit\""));
    assert!(json.contains("\"weight\""));
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    fs::write(&path, "{not json").expect("write");

    let store = Store::open(JsonFileStorage::new(&path));
    assert!(store.history().is_empty());
    assert!(store.favorites().is_empty());
    assert!(store.quick_conversions().is_empty());
}

#[test]
fn older_document_without_quick_conversions_loads() {
    let json = r#"{
        "favorites": [{
            "id": 1700000000001,
            "category": "area",
            "inputs": [
                {"value": "10", "unit": "sqm", "label": "제곱미터 (㎡)"},
                {"value": "3.0251", "unit": "pyeong", "label": "평 (평)"}
            ]
        }],
        "history": [{
            "id": 1700000000000,
            "fromValue": "1.00",
            "fromUnit": "m",
            "toValue": "0.0010",
            "toUnit": "km",
            "category": "length",
            "timestamp": "오후 3:00:00"
        }]
    }"#;
    let store = Store::open(MemoryStorage::with_json(json));
    assert_eq!(store.history().len(), 1);
    assert_eq!(store.favorites()[0].category, Category::Area);
    assert!(store.quick_conversions().is_empty());
}

#[test]
fn new_ids_follow_stored_ids() {
    let json = r#"{"history": [{
        "id": 99999999999999,
        "fromValue": "1.00", "fromUnit": "m",
        "toValue": "0.0010", "toUnit": "km",
        "category": "length", "timestamp": ""
    }]}"#;
    let mut store = Store::open(MemoryStorage::with_json(json));
    store.add_history("2", "m", "0.002", "km", Category::Length);
    assert!(store.history()[0].id > EntryId(99999999999999));
}

#[test]
fn maximum_stored_id_does_not_overflow() {
    let json = r#"{"history": [{
        "id": 18446744073709551615,
        "fromValue": "1.00", "fromUnit": "m",
        "toValue": "0.0010", "toUnit": "km",
        "category": "length", "timestamp": ""
    }]}"#;
    let mut store = Store::open(MemoryStorage::with_json(json));
    store.add_history("2", "m", "0.002", "km", Category::Length);
    assert_eq!(store.history().len(), 2);
    assert_eq!(store.history()[0].id, EntryId(u64::MAX));
}

#[test]
fn empty_result_is_not_recorded() {
    let mut store = Store::open(MemoryStorage::new());
    store.add_history("1", "k", "", "f", Category::Temperature);
    assert!(store.history().is_empty());
    assert_eq!(store.storage().save_count(), 0);
}

#[test]
fn every_mutation_is_saved() {
    let mut store = Store::open(MemoryStorage::new());
    store.add_history("1", "m", "0.001", "km", Category::Length);
    store.record_quick("m", "km", Category::Length);
    let id = store.history()[0].id;
    store.remove_history(id);
    assert_eq!(store.storage().save_count(), 3);

    store.remove_history(EntryId(42));
    assert_eq!(store.storage().save_count(), 3);

    store.clear_history();
    assert_eq!(store.storage().save_count(), 4);
    assert!(store.storage().json().is_some_and(|j| j.contains("quickConversions")));
}

#[test]
fn favorite_needs_a_value() {
    let mut store = Store::open(MemoryStorage::new());
    let err = store
        .add_favorite(Category::Length, [input("", "m"), input("", "km")])
        .unwrap_err();
    assert_eq!(err, FavoriteError::EmptyInputs);
    assert_eq!(err.to_string(), "변환 값을 입력하세요.");
    assert!(store.favorites().is_empty());
}

#[test]
fn favorites_newest_first_and_removable() {
    let mut store = Store::open(MemoryStorage::new());
    store
        .add_favorite(Category::Length, [input("1", "m"), input("", "km")])
        .expect("first");
    store
        .add_favorite(Category::Weight, [input("1", "kg"), input("2.2046", "lb")])
        .expect("second");
    assert_eq!(store.favorites()[0].category, Category::Weight);
    assert_eq!(store.favorites()[1].summary(), "1 m = 0 km");

    let id = store.favorites()[1].id;
    assert_eq!(store.remove_favorite(id).len(), 1);
}
