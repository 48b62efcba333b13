// Client Domain Model

use serde::{Deserialize, Serialize};

/// Client row id (SQLite rowid)
pub type ClientId = i64;

/// A brokerage client.
///
/// Insert-only: clients are never renamed or deleted. Names are NOT
/// unique; name lookups resolve to the first matching row by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}
