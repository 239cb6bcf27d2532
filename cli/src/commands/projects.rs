use std::collections::HashSet;

use serde_json::json;

use shutterdesk_core::filter::{FilterKey, filter_projects};

use crate::util;

pub async fn run(api_url: &str, query: &str, filters: &[String]) -> i32 {
    let mut keys = HashSet::new();
    for raw in filters {
        match parse_filter(raw) {
            Some(key) => {
                keys.insert(key);
            }
            None => {
                return util::exit_error(&format!(
                    "unknown filter {raw:?} (expected active, pending, completed, high_value or outsourced)"
                ));
            }
        }
    }

    let (success, projects) = util::fetch_projects(api_url).await;
    let matched = filter_projects(&projects, query, &keys);

    util::print_json(&json!({
        "success": success,
        "total": projects.len(),
        "matched": matched.len(),
        "projects": matched,
    }))
}

fn parse_filter(raw: &str) -> Option<FilterKey> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "active" => Some(FilterKey::Active),
        "pending" => Some(FilterKey::Pending),
        "completed" => Some(FilterKey::Completed),
        "high_value" | "high-value" => Some(FilterKey::HighValue),
        "outsourced" => Some(FilterKey::Outsourced),
        _ => None,
    }
}
