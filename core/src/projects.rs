use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::status::StatusClass;

/// A raw project record as the backend returns it (camelCase JSON).
///
/// Owned by the backend, read-only here, and immutable during one
/// aggregation pass. The shoot dates stay raw strings on purpose: the
/// backend historically emits malformed values, and parsing happens at
/// aggregation time, per field, so one bad date cannot sink a whole month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    /// Free-form status string, e.g. "active", "On_Hold", "finished".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Raw shoot-start timestamp, possibly malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoot_start_date: Option<String>,
    /// Raw shoot-end timestamp, possibly malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoot_end_date: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<f64>,
    #[serde(default)]
    pub outsourcing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ProjectRecord {
    /// Status class for this record, combining the free-form status string
    /// with the pending-amount hint.
    pub fn status_class(&self) -> StatusClass {
        StatusClass::classify(self.status.as_deref(), self.pending_amount)
    }
}

/// Envelope the project endpoints wrap their payload in.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: ProjectsData,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProjectsData {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl ProjectsEnvelope {
    /// Projects on success, an empty list otherwise. Aggregation always
    /// receives a real collection, never a null payload.
    pub fn into_projects(self) -> Vec<ProjectRecord> {
        if self.success {
            self.data.projects
        } else {
            Vec::new()
        }
    }
}
