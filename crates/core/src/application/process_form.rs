// Process Creation Form - cascading field state and its driver

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::entity_store::EntityStore;
use crate::domain::reference::internal_reference;
use crate::domain::{ProcessDraft, ProcessId, ProcessType, TransportModal};
use crate::error::Result;
use crate::port::TimeProvider;

/// Process-creation form state.
///
/// A plain state machine over the form fields. Transitions are pure
/// functions of the current state plus their inputs, so the cascade
/// rules are testable without any rendering surface; the shell binds
/// the public fields to widgets and calls the transitions on the
/// matching events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessForm {
    pub client: String,
    /// Derived: predicted reference code, recomputed on client selection
    pub reference: String,
    pub responsible: String,
    pub acquirer: String,
    pub supplier: String,
    #[serde(rename = "type")]
    pub process_type: Option<ProcessType>,
    pub modal: Option<TransportModal>,
    pub responsible_is_client: bool,
    pub acquirer_is_client: bool,
    /// Derived: supplier candidates belonging to the selected client
    pub supplier_choices: Vec<String>,
}

impl ProcessForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a client selection: the client field, the predicted reference
    /// and the supplier candidates change together. Nothing else moves;
    /// in particular responsible/acquirer keep whatever value the copy
    /// flags produced for the previously selected client.
    pub fn select_client(
        &mut self,
        name: impl Into<String>,
        reference: String,
        supplier_choices: Vec<String>,
    ) {
        self.client = name.into();
        self.reference = reference;
        self.supplier_choices = supplier_choices;
    }

    /// Flip the "responsible is the client" checkbox. Checked copies the
    /// client name over the field; unchecked clears it, even when the
    /// user typed a manual value in between.
    pub fn toggle_responsible_is_client(&mut self) {
        self.responsible_is_client = !self.responsible_is_client;
        if self.responsible_is_client {
            self.responsible = self.client.clone();
        } else {
            self.responsible.clear();
        }
    }

    /// Flip the "acquirer is the client" checkbox, same copy/clear rule
    pub fn toggle_acquirer_is_client(&mut self) {
        self.acquirer_is_client = !self.acquirer_is_client;
        if self.acquirer_is_client {
            self.acquirer = self.client.clone();
        } else {
            self.acquirer.clear();
        }
    }

    /// Back to the initial state: every field empty, flags off, no choices
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current fields as a submission draft
    pub fn draft(&self) -> ProcessDraft {
        ProcessDraft {
            internal_reference: self.reference.clone(),
            client: self.client.clone(),
            responsible: self.responsible.clone(),
            acquirer: self.acquirer.clone(),
            supplier: self.supplier.clone(),
            process_type: self.process_type,
            modal: self.modal,
        }
    }
}

/// Drives a [`ProcessForm`] against the store and the calendar.
#[derive(Clone)]
pub struct ProcessFormService {
    entities: EntityStore,
    time_provider: Arc<dyn TimeProvider>,
}

impl ProcessFormService {
    pub fn new(entities: EntityStore, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            entities,
            time_provider,
        }
    }

    /// Handle a client selection.
    ///
    /// The process count is read exactly once, here. The resulting
    /// reference predicts the ordinal the next insert will take and is
    /// stored as-is at submit time, so a process created elsewhere between
    /// selection and submission leaves the prediction stale on purpose:
    /// the code the user saw is the code that gets stored.
    pub async fn select_client(&self, form: &mut ProcessForm, name: &str) -> Result<()> {
        let count = self.entities.count_processes().await?;
        let reference = internal_reference(name, self.time_provider.today(), count);
        let suppliers = self.entities.list_suppliers_for_client(name).await?;

        form.select_client(name, reference, suppliers);
        Ok(())
    }

    /// Submit the form. On success the form resets for the next entry;
    /// on failure it keeps its state so the user can correct and retry.
    pub async fn submit(&self, form: &mut ProcessForm) -> Result<ProcessId> {
        let draft = form.draft();
        let id = self.entities.create_process(&draft).await?;

        form.reset();
        Ok(id)
    }
}
