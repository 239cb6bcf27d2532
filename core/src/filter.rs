use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::projects::ProjectRecord;
use crate::status::StatusClass;

/// Projects at or above this amount count as high value.
pub const HIGH_VALUE_THRESHOLD: f64 = 50_000.0;

/// A selectable project filter. Status keys resolve through
/// [`StatusClass`]; the remaining keys are numeric/flag predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Active,
    Pending,
    Completed,
    HighValue,
    Outsourced,
}

impl FilterKey {
    fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            FilterKey::Active => project.status_class() == StatusClass::Active,
            FilterKey::Pending => project.status_class() == StatusClass::Pending,
            FilterKey::Completed => project.status_class() == StatusClass::Completed,
            FilterKey::HighValue => project.amount >= HIGH_VALUE_THRESHOLD,
            FilterKey::Outsourced => project.outsourcing,
        }
    }
}

/// Filter a project list by free-text query and selected filter keys.
///
/// The query matches case-insensitively as a substring of name, code,
/// status, client name or company. Filter keys are OR'd together (the
/// union of their matches); the query and the key set both have to
/// hold. An empty query with an empty key set returns the input
/// unchanged. Pure and order-preserving.
pub fn filter_projects(
    projects: &[ProjectRecord],
    query: &str,
    filters: &HashSet<FilterKey>,
) -> Vec<ProjectRecord> {
    let query = query.trim().to_ascii_lowercase();
    projects
        .iter()
        .filter(|p| matches_query(p, &query))
        .filter(|p| filters.is_empty() || filters.iter().any(|key| key.matches(p)))
        .cloned()
        .collect()
}

fn matches_query(project: &ProjectRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        Some(project.name.as_str()),
        Some(project.code.as_str()),
        project.status.as_deref(),
        project.client_name.as_deref(),
        project.company.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_ascii_lowercase().contains(query))
}
