//! On-disk persistence behavior across store restarts.

use bucketlist_core::{ItemStore, ListController, TodoStore};
use std::sync::Arc;

#[test]
fn test_items_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bucketlist.sqlite");

    {
        let store = TodoStore::open(&db_path).unwrap();
        store.create("Buy milk").unwrap();
        let dog = store.create("Walk dog").unwrap();
        store.set_completed(dog.id, true).unwrap();
    }

    let store = TodoStore::open(&db_path).unwrap();
    let mut items = store.list_all().unwrap();
    items.sort_by_key(|i| i.id);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "Buy milk");
    assert!(!items[0].is_completed);
    assert_eq!(items[1].text, "Walk dog");
    assert!(items[1].is_completed);
}

#[test]
fn test_mark_is_rederived_from_disk_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bucketlist.sqlite");

    {
        let store = TodoStore::open(&db_path).unwrap();
        for i in 0..5 {
            store.create(&format!("item {i}")).unwrap();
        }
        // Leave a gap below the top: delete id 2
        store.delete_by_id(2).unwrap();
    }

    let store = TodoStore::open(&db_path).unwrap();
    let item = store.create("after reopen").unwrap();
    assert_eq!(item.id, 5, "next id continues past the largest on disk");
}

#[test]
fn test_controller_full_session_against_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bucketlist.sqlite");

    {
        let store = Arc::new(TodoStore::open(&db_path).unwrap());
        let mut controller = ListController::new(store);
        controller.add("Buy milk");
        controller.add("Walk dog");
        controller.toggle_completed(0);
        controller.delete(1);
        controller.add("Call mom");
    }

    // A fresh session sees exactly what the first one left behind
    let store = Arc::new(TodoStore::open(&db_path).unwrap());
    let controller = ListController::new(store);

    let mut rows: Vec<(i64, &str, bool)> = controller
        .items()
        .iter()
        .map(|i| (i.id, i.text.as_str(), i.is_completed))
        .collect();
    rows.sort_by_key(|r| r.0);

    assert_eq!(rows, vec![(0, "Buy milk", true), (2, "Call mom", false)]);
}

#[test]
fn test_spec_example_flow_through_controller() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("bucketlist.sqlite");

    let store = Arc::new(TodoStore::open(&db_path).unwrap());
    let mut controller = ListController::new(store);

    controller.add("Buy milk");
    controller.add("Walk dog");
    assert_eq!(controller.len(), 2);

    let milk_row = controller
        .items()
        .iter()
        .position(|i| i.id == 0)
        .expect("first created item has id 0");
    assert!(controller.delete(milk_row));

    assert_eq!(controller.len(), 1);
    assert_eq!(controller.items()[0].id, 1);
    assert_eq!(controller.items()[0].text, "Walk dog");

    assert!(controller.set_text(0, "Walk dog twice"));
    controller.refresh();
    assert_eq!(controller.items()[0].text, "Walk dog twice");
}
