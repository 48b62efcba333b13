// Despacho Core - Domain Logic & Ports
// NO infrastructure dependencies: storage and rendering plug in from outside

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
