// Supplier Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::client::ClientId;

/// Supplier row id (SQLite rowid)
pub type SupplierId = i64;

/// A goods or services provider, attached to exactly one client.
///
/// Suppliers registered under one client never show up in another
/// client's candidate list, even when the names collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub client_id: ClientId,
}
