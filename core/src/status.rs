use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized status bucket a raw, inconsistently-spelled status string
/// resolves to. `Unknown` is a legitimate terminal state, not an error.
///
/// The backend status vocabulary drifted across app versions, so every
/// call site that cares about status goes through [`StatusClass::classify`]
/// rather than comparing strings itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Active,
    Pending,
    Completed,
    Unknown,
}

impl StatusClass {
    /// Resolve a free-form status string plus an optional pending-amount
    /// hint into a status class.
    ///
    /// Rules apply in order, case-insensitively:
    /// 1. `completed` / `finished` → Completed
    /// 2. `active` / `ongoing` / `in_progress` → Active
    /// 3. `pending` / `on_hold` / `draft` → Pending
    /// 4. Absent or unrecognized status falls back to the hint: a positive
    ///    pending amount means work is still owed (Active); a non-positive
    ///    one means the project settled (Completed); no hint → Unknown.
    pub fn classify(status: Option<&str>, pending_amount: Option<f64>) -> Self {
        if let Some(raw) = status {
            match raw.trim().to_ascii_lowercase().as_str() {
                "completed" | "finished" => return StatusClass::Completed,
                "active" | "ongoing" | "in_progress" => return StatusClass::Active,
                "pending" | "on_hold" | "draft" => return StatusClass::Pending,
                _ => {}
            }
        }
        match pending_amount {
            Some(p) if p > 0.0 => StatusClass::Active,
            Some(_) => StatusClass::Completed,
            None => StatusClass::Unknown,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, StatusClass::Completed)
    }
}
