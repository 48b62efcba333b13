// Application Layer - Use Cases and Business Logic

pub mod entity_store;
pub mod process_form;

// Re-exports
pub use entity_store::EntityStore;
pub use process_form::{ProcessForm, ProcessFormService};
