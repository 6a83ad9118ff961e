//! Store record and request body

use serde::{Deserialize, Serialize};

use super::{check_max_chars, Validate, ValidationResult};

/// Longest store name accepted, in characters
pub const STORE_NAME_MAX_CHARS: usize = 80;

/// A store as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
}

impl Store {
    /// Build from a `SELECT id, name FROM stores` row
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

/// Body of `POST /store`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewStore {
    pub name: String,
}

impl Validate for NewStore {
    fn validate(&self) -> ValidationResult<()> {
        check_max_chars("name", &self.name, STORE_NAME_MAX_CHARS)
    }
}
