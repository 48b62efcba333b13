// SQLite DispatchStore Implementation

use crate::SqliteDispatchTransaction;
use async_trait::async_trait;
use despacho_core::domain::{
    Client, ClientId, NewProcess, ProcessId, ProcessRecord, Supplier, SupplierId,
};
use despacho_core::error::{AppError, Result};
use despacho_core::port::{DispatchStore, DispatchTransaction, TransactionalDispatchStore};
use sqlx::SqlitePool;

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // Extract database-specific error code and message
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => {
                        // UNIQUE constraint failed
                        AppError::Storage(format!(
                            "Unique constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "787" | "3850" => {
                        // FOREIGN KEY constraint failed
                        AppError::Storage(format!(
                            "Foreign key constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Storage(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => {
                        // SQLITE_FULL - database or disk is full
                        AppError::Storage(format!("Database full: {}", db_err.message()))
                    }
                    _ => {
                        // Other database errors
                        AppError::Storage(format!(
                            "Database error [{}]: {}",
                            code_str,
                            db_err.message()
                        ))
                    }
                }
            } else {
                AppError::Storage(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Storage("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Storage(format!("Column not found: {}", col))
        }
        _ => {
            // Connection, pool, protocol errors
            AppError::Storage(err.to_string())
        }
    }
}

pub struct SqliteDispatchStore {
    pool: SqlitePool,
}

impl SqliteDispatchStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DispatchStore for SqliteDispatchStore {
    async fn insert_client(&self, name: &str) -> Result<ClientId> {
        let result = sqlx::query("INSERT INTO Clientes (nome_cliente) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_supplier(&self, name: &str, client_id: ClientId) -> Result<SupplierId> {
        let result =
            sqlx::query("INSERT INTO Fornecedores (nome_fornecedor, cliente_id) VALUES (?, ?)")
                .bind(name)
                .bind(client_id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_process(&self, process: &NewProcess) -> Result<ProcessId> {
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
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_client_by_id(&self, id: ClientId) -> Result<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, nome_cliente FROM Clientes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_client()))
    }

    async fn find_client_by_name(&self, name: &str) -> Result<Option<Client>> {
        // Names are not unique; the oldest row wins, matching how the
        // databases were used before ids were exposed anywhere
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, nome_cliente FROM Clientes WHERE nome_cliente = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_client()))
    }

    async fn find_supplier_by_name(&self, name: &str) -> Result<Option<Supplier>> {
        let row = sqlx::query_as::<_, SupplierRow>(
            "SELECT id, nome_fornecedor, cliente_id FROM Fornecedores \
             WHERE nome_fornecedor = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|r| r.into_supplier()))
    }

    async fn all_clients(&self) -> Result<Vec<Client>> {
        let rows: Vec<ClientRow> =
            sqlx::query_as("SELECT id, nome_cliente FROM Clientes ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_client()).collect())
    }

    async fn suppliers_for_client(&self, client_name: &str) -> Result<Vec<Supplier>> {
        let rows: Vec<SupplierRow> = sqlx::query_as(
            r#"
            SELECT Fornecedores.id, Fornecedores.nome_fornecedor, Fornecedores.cliente_id
            FROM Fornecedores
            JOIN Clientes ON Fornecedores.cliente_id = Clientes.id
            WHERE Clientes.nome_cliente = ?
            ORDER BY Fornecedores.id
            "#,
        )
        .bind(client_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_supplier()).collect())
    }

    async fn processes_joined(&self) -> Result<Vec<ProcessRecord>> {
        // Inner joins on purpose: a row whose client or supplier link is
        // NULL or dangling simply does not appear in the listing
        let rows: Vec<ProcessJoinedRow> = sqlx::query_as(
            r#"
            SELECT Processos.referencia_interna, Clientes.nome_cliente,
                   Processos.responsavel, Processos.adquirente,
                   Fornecedores.nome_fornecedor, Processos.tipo, Processos.modal
            FROM Processos
            JOIN Clientes ON Processos.cliente_id = Clientes.id
            JOIN Fornecedores ON Processos.fornecedor_id = Fornecedores.id
            ORDER BY Processos.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_record()).collect())
    }

    async fn count_processes(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Processos")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count)
    }
}

#[async_trait]
impl TransactionalDispatchStore for SqliteDispatchStore {
    async fn begin_transaction(&self) -> Result<Box<dyn DispatchTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteDispatchTransaction::new(tx)))
    }
}

/// SQLite row for Clientes
#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: i64,
    nome_cliente: String,
}

impl ClientRow {
    fn into_client(self) -> Client {
        Client {
            id: self.id,
            name: self.nome_cliente,
        }
    }
}

/// SQLite row for Fornecedores
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SupplierRow {
    pub(crate) id: i64,
    pub(crate) nome_fornecedor: String,
    pub(crate) cliente_id: Option<i64>,
}

impl SupplierRow {
    pub(crate) fn into_supplier(self) -> Supplier {
        Supplier {
            id: self.id,
            name: self.nome_fornecedor,
            // Hand-written rows may lack the link; 0 never matches a real client
            client_id: self.cliente_id.unwrap_or_default(),
        }
    }
}

/// SQLite row for the joined process listing
#[derive(Debug, sqlx::FromRow)]
struct ProcessJoinedRow {
    referencia_interna: String,
    nome_cliente: String,
    responsavel: Option<String>,
    adquirente: Option<String>,
    nome_fornecedor: String,
    tipo: Option<String>,
    modal: Option<String>,
}

impl ProcessJoinedRow {
    fn into_record(self) -> ProcessRecord {
        // Free-text columns are nullable in the legacy schema; the listing
        // shows them as empty strings
        ProcessRecord {
            internal_reference: self.referencia_interna,
            client: self.nome_cliente,
            responsible: self.responsavel.unwrap_or_default(),
            acquirer: self.adquirente.unwrap_or_default(),
            supplier: self.nome_fornecedor,
            process_type: self.tipo.unwrap_or_default(),
            modal: self.modal.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use despacho_core::domain::{ProcessType, TransportModal};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn new_process(reference: &str, client_id: i64, supplier_id: i64) -> NewProcess {
        NewProcess {
            internal_reference: reference.to_string(),
            client_id,
            responsible: "Acme Corp".to_string(),
            acquirer: "Beta Ltda".to_string(),
            process_type: ProcessType::Import,
            modal: TransportModal::Sea,
            supplier_id,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_client() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let id = store.insert_client("Acme Corp").await.unwrap();

        let by_id = store.find_client_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.name, "Acme Corp");

        let by_name = store.find_client_by_name("Acme Corp").await.unwrap().unwrap();
        assert_eq!(by_name.id, id);

        assert!(store.find_client_by_name("Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_names_resolve_to_the_first_row() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let first = store.insert_client("Acme Corp").await.unwrap();
        let second = store.insert_client("Acme Corp").await.unwrap();
        assert!(second > first);

        let found = store.find_client_by_name("Acme Corp").await.unwrap().unwrap();
        assert_eq!(found.id, first);
    }

    #[tokio::test]
    async fn test_suppliers_are_scoped_to_their_client() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let acme = store.insert_client("Acme Corp").await.unwrap();
        let beta = store.insert_client("Beta Ltda").await.unwrap();
        store.insert_supplier("Parts Inc", acme).await.unwrap();
        store.insert_supplier("Steel SA", acme).await.unwrap();
        store.insert_supplier("Wires Co", beta).await.unwrap();

        let for_acme = store.suppliers_for_client("Acme Corp").await.unwrap();
        let names: Vec<&str> = for_acme.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Parts Inc", "Steel SA"]);

        assert!(store.suppliers_for_client("Nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_process_stores_the_portuguese_labels() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool.clone());

        let client_id = store.insert_client("Acme Corp").await.unwrap();
        let supplier_id = store.insert_supplier("Parts Inc", client_id).await.unwrap();
        store
            .insert_process(&new_process("ACM240001", client_id, supplier_id))
            .await
            .unwrap();

        let (tipo, modal): (String, String) =
            sqlx::query_as("SELECT tipo, modal FROM Processos WHERE referencia_interna = ?")
                .bind("ACM240001")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(tipo, "Importação");
        assert_eq!(modal, "Marítimo");
    }

    #[tokio::test]
    async fn test_joined_listing_skips_incomplete_rows() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool.clone());

        let client_id = store.insert_client("Acme Corp").await.unwrap();
        let supplier_id = store.insert_supplier("Parts Inc", client_id).await.unwrap();
        store
            .insert_process(&new_process("ACM240001", client_id, supplier_id))
            .await
            .unwrap();

        // A legacy row with no supplier link
        sqlx::query(
            "INSERT INTO Processos (referencia_interna, cliente_id, responsavel, adquirente, tipo, modal) \
             VALUES ('OLD230001', ?, 'x', 'y', 'Importação', 'Aéreo')",
        )
        .bind(client_id)
        .execute(&pool)
        .await
        .unwrap();

        let listing = store.processes_joined().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].internal_reference, "ACM240001");
        assert_eq!(listing[0].client, "Acme Corp");
        assert_eq!(listing[0].supplier, "Parts Inc");
        assert_eq!(listing[0].process_type, "Importação");
        assert_eq!(listing[0].modal, "Marítimo");

        // The incomplete row still counts
        assert_eq!(store.count_processes().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let client_id = store.insert_client("Acme Corp").await.unwrap();
        let supplier_id = store.insert_supplier("Parts Inc", client_id).await.unwrap();

        {
            let mut tx = store.begin_transaction().await.unwrap();
            tx.insert_process(&new_process("ACM240001", client_id, supplier_id))
                .await
                .unwrap();
            // Dropped without commit
        }

        assert_eq!(store.count_processes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_explicit_rollback_discards_the_insert() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let client_id = store.insert_client("Acme Corp").await.unwrap();
        let supplier_id = store.insert_supplier("Parts Inc", client_id).await.unwrap();

        let mut tx = store.begin_transaction().await.unwrap();
        tx.insert_process(&new_process("ACM240001", client_id, supplier_id))
            .await
            .unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(store.count_processes().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_committed_transaction_persists() {
        let pool = setup_test_db().await;
        let store = SqliteDispatchStore::new(pool);

        let client_id = store.insert_client("Acme Corp").await.unwrap();
        let supplier_id = store.insert_supplier("Parts Inc", client_id).await.unwrap();

        let mut tx = store.begin_transaction().await.unwrap();
        let client = tx.find_client_by_name("Acme Corp").await.unwrap().unwrap();
        let supplier = tx.find_supplier_by_name("Parts Inc").await.unwrap().unwrap();
        tx.insert_process(&new_process("ACM240001", client.id, supplier.id))
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(store.count_processes().await.unwrap(), 1);
    }
}
