use serde_json::json;

use shutterdesk_core::calendar::aggregate_month;

use crate::util;

pub async fn run(api_url: &str, year: i32, month: u32) -> i32 {
    let (success, projects) = util::fetch_projects_for_month(api_url, year, month).await;
    let events = aggregate_month(&projects);

    for warning in &events.warnings {
        tracing::warn!(
            project = %warning.project_code,
            field = %warning.field,
            "{}",
            warning.message
        );
    }

    util::print_json(&json!({
        "success": success,
        "year": year,
        "month": month,
        "events": events,
    }))
}
