// Submission Completeness Checks
//
// Every create flows through here before the store is touched: a failed
// check reports ALL missing field names at once and performs no writes.
// Emptiness means the empty string; whitespace-only values pass.

use crate::domain::process::{ProcessDraft, ProcessType, TransportModal};
use crate::error::{AppError, Result};

/// Required-field check for a client registration
pub fn client_submission(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AppError::missing_fields(["name"]));
    }
    Ok(())
}

/// Required-field check for a supplier registration
pub fn supplier_submission(name: &str, client: &str) -> Result<()> {
    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push("name");
    }
    if client.is_empty() {
        missing.push("client");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::missing_fields(missing))
    }
}

/// Required-field check for a process submission.
///
/// The internal reference is derived state and passes through unchecked.
/// On success the selected type/modal pair is returned so callers do not
/// re-unwrap the draft's optionals.
pub fn process_submission(draft: &ProcessDraft) -> Result<(ProcessType, TransportModal)> {
    let mut missing = Vec::new();
    if draft.client.is_empty() {
        missing.push("client");
    }
    if draft.responsible.is_empty() {
        missing.push("responsible");
    }
    if draft.acquirer.is_empty() {
        missing.push("acquirer");
    }
    if draft.supplier.is_empty() {
        missing.push("supplier");
    }
    if draft.process_type.is_none() {
        missing.push("type");
    }
    if draft.modal.is_none() {
        missing.push("modal");
    }

    match (draft.process_type, draft.modal) {
        (Some(process_type), Some(modal)) if missing.is_empty() => Ok((process_type, modal)),
        _ => Err(AppError::missing_fields(missing)),
    }
}
