// Despacho Infrastructure - SQLite Adapter
// Implements: DispatchStore, TransactionalDispatchStore

mod connection;
mod dispatch_store;
mod migration;
mod transaction;

pub use connection::create_pool;
pub use dispatch_store::SqliteDispatchStore;
pub use migration::run_migrations;
pub use transaction::SqliteDispatchTransaction;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
