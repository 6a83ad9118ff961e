//! SQL for the `stores` table

use rusqlite::{params, Connection, OptionalExtension};

use super::database::generate_id;
use super::errors::StorageResult;
use crate::schema::{NewStore, Store};

/// Insert a store under a fresh id and return the stored row.
pub fn insert(conn: &Connection, new: &NewStore) -> StorageResult<Store> {
    let id = generate_id();
    conn.execute(
        "INSERT INTO stores (id, name) VALUES (?1, ?2)",
        params![id, new.name],
    )?;
    let store = conn.query_row(
        "SELECT id, name FROM stores WHERE id = ?1",
        params![id],
        Store::from_row,
    )?;
    Ok(store)
}

pub fn get(conn: &Connection, id: &str) -> StorageResult<Option<Store>> {
    let store = conn
        .query_row(
            "SELECT id, name FROM stores WHERE id = ?1",
            params![id],
            Store::from_row,
        )
        .optional()?;
    Ok(store)
}

/// All stores in storage order.
pub fn list(conn: &Connection) -> StorageResult<Vec<Store>> {
    let mut stmt = conn.prepare("SELECT id, name FROM stores ORDER BY rowid")?;
    let stores = stmt
        .query_map([], Store::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(stores)
}

/// Delete by id. Returns false if no row matched.
///
/// Fails with `StorageError::ForeignKey` while items still reference the store.
pub fn delete(conn: &Connection, id: &str) -> StorageResult<bool> {
    let affected = conn.execute("DELETE FROM stores WHERE id = ?1", params![id])?;
    Ok(affected > 0)
}
