// Entity Store - registration and listing use cases over the store port

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    validation, ClientId, NewProcess, ProcessDraft, ProcessId, ProcessRecord, SupplierId,
};
use crate::error::{AppError, Result};
use crate::port::{DispatchStore, TransactionalDispatchStore};

/// Persistence boundary for clients, suppliers and processes.
///
/// Every create runs its completeness check before the store is touched,
/// so a rejected submission performs no writes at all. Process creation
/// additionally wraps name resolution and the insert in one transaction:
/// a resolution miss rolls the whole thing back.
#[derive(Clone)]
pub struct EntityStore {
    store: Arc<dyn DispatchStore>,
    tx_store: Arc<dyn TransactionalDispatchStore>,
}

impl EntityStore {
    pub fn new(
        store: Arc<dyn DispatchStore>,
        tx_store: Arc<dyn TransactionalDispatchStore>,
    ) -> Self {
        Self { store, tx_store }
    }

    /// Register a client
    pub async fn create_client(&self, name: &str) -> Result<ClientId> {
        validation::client_submission(name)?;

        let id = self.store.insert_client(name).await?;
        info!(client = %name, id, "client registered");
        Ok(id)
    }

    /// Register a supplier under an existing client id
    pub async fn create_supplier(&self, name: &str, client_id: ClientId) -> Result<SupplierId> {
        if name.is_empty() {
            return Err(AppError::missing_fields(["name"]));
        }
        if self.store.find_client_by_id(client_id).await?.is_none() {
            return Err(AppError::NotFound(format!("client id {client_id} not found")));
        }

        let id = self.store.insert_supplier(name, client_id).await?;
        info!(supplier = %name, client_id, id, "supplier registered");
        Ok(id)
    }

    /// Form-facing supplier registration: the client arrives as the name
    /// picked in a dropdown and resolves to the first matching row.
    pub async fn register_supplier(&self, name: &str, client_name: &str) -> Result<SupplierId> {
        validation::supplier_submission(name, client_name)?;

        let client = self
            .store
            .find_client_by_name(client_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("client not found: {client_name}")))?;

        let id = self.store.insert_supplier(name, client.id).await?;
        info!(supplier = %name, client = %client_name, id, "supplier registered");
        Ok(id)
    }

    /// Persist a process submission.
    ///
    /// Client and supplier names resolve to ids and the row is inserted
    /// inside a single transaction; any miss drops the transaction and the
    /// process count stays untouched. The internal reference is stored
    /// exactly as carried by the draft - it was predicted at selection
    /// time and is NOT re-derived here.
    pub async fn create_process(&self, draft: &ProcessDraft) -> Result<ProcessId> {
        let (process_type, modal) = validation::process_submission(draft)?;

        let mut tx = self.tx_store.begin_transaction().await?;

        let client = tx
            .find_client_by_name(&draft.client)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("client not found: {}", draft.client)))?;

        let supplier = tx
            .find_supplier_by_name(&draft.supplier)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("supplier not found: {}", draft.supplier)))?;

        let process = NewProcess {
            internal_reference: draft.internal_reference.clone(),
            client_id: client.id,
            responsible: draft.responsible.clone(),
            acquirer: draft.acquirer.clone(),
            process_type,
            modal,
            supplier_id: supplier.id,
        };

        let id = tx.insert_process(&process).await?;
        tx.commit().await?;

        info!(reference = %process.internal_reference, id, "process registered");
        Ok(id)
    }

    /// Client names in creation order, for selection lists
    pub async fn list_clients(&self) -> Result<Vec<String>> {
        let clients = self.store.all_clients().await?;
        Ok(clients.into_iter().map(|c| c.name).collect())
    }

    /// Supplier names for the given client name, in creation order. Empty
    /// when the client is unknown or has no suppliers yet.
    pub async fn list_suppliers_for_client(&self, client_name: &str) -> Result<Vec<String>> {
        let suppliers = self.store.suppliers_for_client(client_name).await?;
        Ok(suppliers.into_iter().map(|s| s.name).collect())
    }

    /// Joined display rows for every complete process
    pub async fn list_processes(&self) -> Result<Vec<ProcessRecord>> {
        self.store.processes_joined().await
    }

    /// Total number of stored processes
    pub async fn count_processes(&self) -> Result<i64> {
        self.store.count_processes().await
    }
}
