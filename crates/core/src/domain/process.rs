// Process Domain Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::client::ClientId;
use crate::domain::supplier::SupplierId;
use crate::error::AppError;

/// Process row id (SQLite rowid)
pub type ProcessId = i64;

/// Directionality of a dispatch process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessType {
    Import,
    Export,
}

impl ProcessType {
    /// Storage label. Kept identical to the values already present in
    /// databases written by earlier versions of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessType::Import => "Importação",
            ProcessType::Export => "Exportação",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Importação" => Ok(ProcessType::Import),
            "Exportação" => Ok(ProcessType::Export),
            other => Err(AppError::Storage(format!("unknown process type: {other}"))),
        }
    }
}

/// Transport mode of a dispatch process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportModal {
    Air,
    Sea,
    Road,
}

impl TransportModal {
    /// Storage label, same compatibility rule as [`ProcessType::as_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportModal::Air => "Aéreo",
            TransportModal::Sea => "Marítimo",
            TransportModal::Road => "Rodoviário",
        }
    }
}

impl fmt::Display for TransportModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportModal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Aéreo" => Ok(TransportModal::Air),
            "Marítimo" => Ok(TransportModal::Sea),
            "Rodoviário" => Ok(TransportModal::Road),
            other => Err(AppError::Storage(format!("unknown transport modal: {other}"))),
        }
    }
}

/// Raw process submission as captured by the form.
///
/// Client and supplier travel as the displayed names; resolution to row
/// ids happens inside the store transaction at create time. Type and
/// modal stay optional here because the form may not have a selection
/// yet - the completeness check turns a `None` into a validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessDraft {
    pub internal_reference: String,
    pub client: String,
    pub responsible: String,
    pub acquirer: String,
    pub supplier: String,
    #[serde(rename = "type")]
    pub process_type: Option<ProcessType>,
    pub modal: Option<TransportModal>,
}

/// Fully resolved insert shape: the seven stored attributes minus the row id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProcess {
    pub internal_reference: String,
    pub client_id: ClientId,
    pub responsible: String,
    pub acquirer: String,
    pub process_type: ProcessType,
    pub modal: TransportModal,
    pub supplier_id: SupplierId,
}

/// Joined display row for process listings.
///
/// Type and modal stay raw strings on the read path: rows written by hand
/// or by earlier versions may carry values outside the current label set,
/// and the listing shows them as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub internal_reference: String,
    pub client: String,
    pub responsible: String,
    pub acquirer: String,
    pub supplier: String,
    #[serde(rename = "type")]
    pub process_type: String,
    pub modal: String,
}
