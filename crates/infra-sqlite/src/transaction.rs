// SQLite Transaction Implementation

use async_trait::async_trait;
use despacho_core::domain::{Client, NewProcess, ProcessId, Supplier};
use despacho_core::error::Result;
use despacho_core::port::{DispatchTransaction, Transaction};
use sqlx::{Sqlite, Transaction as SqlxTransaction};

use crate::dispatch_store::map_sqlx_error;

/// A dispatch transaction backed by a pooled SQLite connection.
///
/// Dropping it without commit rolls the connection back, so an early
/// `?` return inside process creation leaves no partial rows behind.
pub struct SqliteDispatchTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
}

impl<'a> SqliteDispatchTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Transaction for SqliteDispatchTransaction<'_> {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl DispatchTransaction for SqliteDispatchTransaction<'_> {
    async fn find_client_by_name(&mut self, name: &str) -> Result<Option<Client>> {
        let row: Option<(i64, String)> = sqlx::query_as(
            "SELECT id, nome_cliente FROM Clientes WHERE nome_cliente = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|(id, name)| Client { id, name }))
    }

    async fn find_supplier_by_name(&mut self, name: &str) -> Result<Option<Supplier>> {
        let row: Option<crate::dispatch_store::SupplierRow> = sqlx::query_as(
            "SELECT id, nome_fornecedor, cliente_id FROM Fornecedores \
             WHERE nome_fornecedor = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_supplier()))
    }

    async fn insert_process(&mut self, process: &NewProcess) -> Result<ProcessId> {
        let result = sqlx::query(
            r#"
            INSERT INTO Processos (
                referencia_interna, cliente_id, responsavel, adquirente,
                fornecedor_id, tipo, modal
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&process.internal_reference)
        .bind(process.client_id)
        .bind(&process.responsible)
        .bind(&process.acquirer)
        .bind(process.supplier_id)
        .bind(process.process_type.as_str())
        .bind(process.modal.as_str())
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }
}
