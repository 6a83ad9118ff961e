//! Item record and request bodies

use serde::{Deserialize, Serialize};

use super::{check_max_chars, Validate, ValidationError, ValidationResult};

/// Longest item name accepted, in characters
pub const ITEM_NAME_MAX_CHARS: usize = 50;

/// An item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub store_id: String,
}

impl Item {
    /// Build from a `SELECT id, name, price, store_id FROM items` row
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            price: row.get("price")?,
            store_id: row.get("store_id")?,
        })
    }
}

/// Body of `POST /item`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub store_id: String,
}

impl Validate for NewItem {
    fn validate(&self) -> ValidationResult<()> {
        check_max_chars("name", &self.name, ITEM_NAME_MAX_CHARS)?;
        check_price(self.price)
    }
}

/// Body of `PUT /item/{id}`. The owning store cannot change.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemUpdate {
    pub name: String,
    pub price: f64,
}

impl Validate for ItemUpdate {
    fn validate(&self) -> ValidationResult<()> {
        check_max_chars("name", &self.name, ITEM_NAME_MAX_CHARS)?;
        check_price(self.price)
    }
}

fn check_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::new("price", "Not a valid number."));
    }
    Ok(())
}
