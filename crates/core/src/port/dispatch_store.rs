// Dispatch Store Port (Interface)

use crate::domain::{
    Client, ClientId, NewProcess, ProcessId, ProcessRecord, Supplier, SupplierId,
};
use crate::error::Result;
use async_trait::async_trait;

/// Persistence interface for clients, suppliers and processes.
///
/// The core never sees SQL; adapters write through to whatever schema
/// they manage. Name lookups return the first matching row in insertion
/// order because client and supplier names are not unique.
#[async_trait]
pub trait DispatchStore: Send + Sync {
    /// Insert a client row, returning its id
    async fn insert_client(&self, name: &str) -> Result<ClientId>;

    /// Insert a supplier row attached to a client, returning its id
    async fn insert_supplier(&self, name: &str, client_id: ClientId) -> Result<SupplierId>;

    /// Insert a fully resolved process row, returning its id
    async fn insert_process(&self, process: &NewProcess) -> Result<ProcessId>;

    /// Look a client up by row id
    async fn find_client_by_id(&self, id: ClientId) -> Result<Option<Client>>;

    /// First client carrying this name, in insertion order
    async fn find_client_by_name(&self, name: &str) -> Result<Option<Client>>;

    /// First supplier carrying this name, in insertion order
    async fn find_supplier_by_name(&self, name: &str) -> Result<Option<Supplier>>;

    /// Every client, in insertion order
    async fn all_clients(&self) -> Result<Vec<Client>>;

    /// Suppliers belonging to the named client, in insertion order
    async fn suppliers_for_client(&self, client_name: &str) -> Result<Vec<Supplier>>;

    /// Joined display rows for every complete process. Rows whose client
    /// or supplier link is missing are silently excluded.
    async fn processes_joined(&self) -> Result<Vec<ProcessRecord>>;

    /// Total number of stored process rows, complete or not
    async fn count_processes(&self) -> Result<i64>;
}
