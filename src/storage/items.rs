//! SQL for the `items` table

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::database::generate_id;
use super::errors::StorageResult;
use crate::schema::{Item, ItemUpdate, NewItem};

const SELECT_ONE: &str = "SELECT id, name, price, store_id FROM items WHERE id = ?1";

/// Insert an item under a fresh id and return the stored row.
///
/// Fails with `StorageError::ForeignKey` if `store_id` names no store and
/// with `StorageError::Unique` if the store already has an item by that name.
pub fn insert(conn: &Connection, new: &NewItem) -> StorageResult<Item> {
    let id = generate_id();
    conn.execute(
        "INSERT INTO items (id, name, price, store_id) VALUES (?1, ?2, ?3, ?4)",
        params![id, new.name, new.price, new.store_id],
    )?;
    let item = conn.query_row(SELECT_ONE, params![id], Item::from_row)?;
    Ok(item)
}

pub fn get(conn: &Connection, id: &str) -> StorageResult<Option<Item>> {
    let item = conn
        .query_row(SELECT_ONE, params![id], Item::from_row)
        .optional()?;
    Ok(item)
}

/// All items in storage order.
pub fn list(conn: &Connection) -> StorageResult<Vec<Item>> {
    let mut stmt = conn.prepare("SELECT id, name, price, store_id FROM items ORDER BY rowid")?;
    let items = stmt
        .query_map([], Item::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

/// Overwrite name and price, returning the row as stored afterwards.
///
/// Returns `None` if the item does not exist. Existence check, write and
/// re-read share one transaction, which takes the write lock up front so
/// concurrent updates queue on the busy timeout instead of deadlocking.
pub fn update(conn: &mut Connection, id: &str, changes: &ItemUpdate) -> StorageResult<Option<Item>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let exists = tx
        .query_row("SELECT 1 FROM items WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?
        .is_some();
    if !exists {
        return Ok(None);
    }

    tx.execute(
        "UPDATE items SET name = ?1, price = ?2 WHERE id = ?3",
        params![changes.name, changes.price, id],
    )?;
    let item = tx.query_row(SELECT_ONE, params![id], Item::from_row)?;
    tx.commit()?;

    Ok(Some(item))
}

/// Delete by id. Returns false if no row matched.
pub fn delete(conn: &Connection, id: &str) -> StorageResult<bool> {
    let affected = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
    Ok(affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NewStore;
    use crate::storage::{stores, Database, StorageError};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Database, String) {
        let tmp = TempDir::new().unwrap();
        let db = Database::new(tmp.path().join("items.sqlite"));
        db.init_schema().unwrap();
        let store = db
            .with_connection(|c| {
                stores::insert(
                    c,
                    &NewStore {
                        name: "Shop A".to_string(),
                    },
                )
            })
            .unwrap();
        (tmp, db, store.id)
    }

    fn new_item(name: &str, price: f64, store_id: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            price,
            store_id: store_id.to_string(),
        }
    }

    #[test]
    fn test_insert_then_get() {
        let (_tmp, db, store_id) = setup();
        let item = db
            .with_connection(|c| insert(c, &new_item("Widget", 9.99, &store_id)))
            .unwrap();
        assert_eq!(item.store_id, store_id);
        assert_eq!(db.with_connection(|c| get(c, &item.id)).unwrap(), Some(item));
    }

    #[test]
    fn test_insert_for_missing_store_is_foreign_key_violation() {
        let (_tmp, db, _) = setup();
        let err = db
            .with_connection(|c| insert(c, &new_item("Widget", 1.0, "missing")))
            .unwrap_err();
        assert!(matches!(err, StorageError::ForeignKey(_)));
    }

    #[test]
    fn test_same_name_in_same_store_is_unique_violation() {
        let (_tmp, db, store_id) = setup();
        db.with_connection(|c| insert(c, &new_item("Widget", 1.0, &store_id)))
            .unwrap();
        let err = db
            .with_connection(|c| insert(c, &new_item("Widget", 2.0, &store_id)))
            .unwrap_err();
        assert!(matches!(err, StorageError::Unique(_)));
    }

    #[test]
    fn test_update_missing_item_is_none() {
        let (_tmp, db, _) = setup();
        let changes = ItemUpdate {
            name: "New".to_string(),
            price: 1.0,
        };
        assert_eq!(db.with_connection(|c| update(c, "nope", &changes)).unwrap(), None);
    }

    #[test]
    fn test_update_keeps_store_and_returns_stored_values() {
        let (_tmp, db, store_id) = setup();
        let item = db
            .with_connection(|c| insert(c, &new_item("Widget", 1.0, &store_id)))
            .unwrap();
        let changes = ItemUpdate {
            name: "Gadget".to_string(),
            price: 2.5,
        };
        let updated = db
            .with_connection(|c| update(c, &item.id, &changes))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.price, 2.5);
        assert_eq!(updated.store_id, store_id);
    }

    #[test]
    fn test_update_to_taken_name_rolls_back() {
        let (_tmp, db, store_id) = setup();
        db.with_connection(|c| insert(c, &new_item("Taken", 1.0, &store_id)))
            .unwrap();
        let item = db
            .with_connection(|c| insert(c, &new_item("Mine", 1.0, &store_id)))
            .unwrap();
        let changes = ItemUpdate {
            name: "Taken".to_string(),
            price: 3.0,
        };
        let err = db
            .with_connection(|c| update(c, &item.id, &changes))
            .unwrap_err();
        assert!(matches!(err, StorageError::Unique(_)));
        assert_eq!(db.with_connection(|c| get(c, &item.id)).unwrap(), Some(item));
    }

    #[test]
    fn test_concurrent_updates_on_distinct_items_all_succeed() {
        let (_tmp, db, store_id) = setup();
        let ids: Vec<String> = (0..8)
            .map(|i| {
                db.with_connection(|c| insert(c, &new_item(&format!("item-{i}"), 1.0, &store_id)))
                    .unwrap()
                    .id
            })
            .collect();

        let handles: Vec<_> = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let db = db.clone();
                std::thread::spawn(move || {
                    let mut failures = Vec::new();
                    for round in 0..50 {
                        let changes = ItemUpdate {
                            name: format!("item-{i}"),
                            price: round as f64,
                        };
                        match db.with_connection(|c| update(c, &id, &changes)) {
                            Ok(Some(_)) => {}
                            Ok(None) => failures.push("item vanished".to_string()),
                            Err(e) => failures.push(e.to_string()),
                        }
                    }
                    failures
                })
            })
            .collect();

        let failures: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert!(failures.is_empty(), "{} failures, first: {:?}", failures.len(), failures.first());

        let prices: Vec<f64> = db
            .with_connection(|c| list(c))
            .unwrap()
            .into_iter()
            .map(|item| item.price)
            .collect();
        assert_eq!(prices, vec![49.0; 8]);
    }

    #[test]
    fn test_list_and_delete() {
        let (_tmp, db, store_id) = setup();
        let a = db
            .with_connection(|c| insert(c, &new_item("A", 1.0, &store_id)))
            .unwrap();
        let b = db
            .with_connection(|c| insert(c, &new_item("B", 2.0, &store_id)))
            .unwrap();
        assert_eq!(db.with_connection(|c| list(c)).unwrap(), vec![a.clone(), b.clone()]);

        assert!(db.with_connection(|c| delete(c, &a.id)).unwrap());
        assert!(!db.with_connection(|c| delete(c, &a.id)).unwrap());
        assert_eq!(db.with_connection(|c| list(c)).unwrap(), vec![b]);
    }

    #[test]
    fn test_store_with_items_cannot_be_deleted() {
        let (_tmp, db, store_id) = setup();
        db.with_connection(|c| insert(c, &new_item("Widget", 1.0, &store_id)))
            .unwrap();
        let err = db
            .with_connection(|c| stores::delete(c, &store_id))
            .unwrap_err();
        assert!(matches!(err, StorageError::ForeignKey(_)));
    }
}
