// Port Layer - Interfaces for external dependencies

pub mod dispatch_store;
pub mod time_provider;
pub mod transaction;

// Re-exports
pub use dispatch_store::DispatchStore;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use transaction::{DispatchTransaction, Transaction, TransactionalDispatchStore};
