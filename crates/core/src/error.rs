// Central Error Type for the Despacho Core

use thiserror::Error;

/// Application-level error shared by every layer.
///
/// Three buckets only: a submission with empty required fields, a name or
/// id that resolved to no row, and everything the storage engine reports.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required fields left empty on a submission. Carries every missing
    /// field name, in form order, so the shell can report them all at once.
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    /// A referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying storage failure (locked database, broken schema, ...)
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Validation failure listing the missing field names in form order
    pub fn missing_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        AppError::Validation {
            missing: fields.into_iter().map(String::from).collect(),
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in the infra-sqlite crate
// by converting to AppError::Storage(String)

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_all_missing_fields() {
        let err = AppError::missing_fields(["client", "modal"]);
        assert_eq!(err.to_string(), "missing required fields: client, modal");
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = AppError::NotFound("client not found: Acme".to_string());
        assert_eq!(err.to_string(), "not found: client not found: Acme");
    }
}
