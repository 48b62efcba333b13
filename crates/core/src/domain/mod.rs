// Domain Layer - Pure business logic and entities

pub mod client;
pub mod process;
pub mod reference;
pub mod supplier;
pub mod validation;

// Re-exports
pub use client::{Client, ClientId};
pub use process::{
    NewProcess, ProcessDraft, ProcessId, ProcessRecord, ProcessType, TransportModal,
};
pub use supplier::{Supplier, SupplierId};
