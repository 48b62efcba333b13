// Transaction port for atomic operations

use crate::domain::{Client, NewProcess, ProcessId, Supplier};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Store handle able to open dispatch transactions
#[async_trait]
pub trait TransactionalDispatchStore: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn DispatchTransaction>>;
}

/// Store operations available inside a process-creation transaction.
///
/// Name resolution and the insert run against the same connection, so a
/// dropped (uncommitted) transaction leaves no partial state behind.
#[async_trait]
pub trait DispatchTransaction: Transaction {
    /// First client carrying this name (within transaction)
    async fn find_client_by_name(&mut self, name: &str) -> Result<Option<Client>>;

    /// First supplier carrying this name (within transaction)
    async fn find_supplier_by_name(&mut self, name: &str) -> Result<Option<Supplier>>;

    /// Insert a resolved process row (within transaction)
    async fn insert_process(&mut self, process: &NewProcess) -> Result<ProcessId>;
}
