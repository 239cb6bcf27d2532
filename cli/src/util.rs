use serde_json::json;
use url::Url;

use shutterdesk_core::charts::CategoryBreakdown;
use shutterdesk_core::error::FetchError;
use shutterdesk_core::projects::{ProjectRecord, ProjectsEnvelope};
use shutterdesk_core::series::NamedSeries;

pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Print a structured JSON error to stderr and return the CLI error code.
pub fn exit_error(message: &str) -> i32 {
    let err = json!({
        "error": "cli_error",
        "message": message
    });
    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
    1
}

/// Print a payload as pretty JSON; exit code 0 on success.
pub fn print_json(payload: &serde_json::Value) -> i32 {
    match serde_json::to_string_pretty(payload) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => exit_error(&format!("failed to encode output: {e}")),
    }
}

fn endpoint_url(api_url: &str, path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
    let mut url = Url::parse(&format!("{api_url}{path}")).map_err(|e| FetchError::Transport {
        endpoint: path.to_string(),
        message: format!("invalid URL: {e}"),
    })?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

async fn get_json<T: serde::de::DeserializeOwned>(
    api_url: &str,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    let url = endpoint_url(api_url, path, query)?;
    let resp = client()
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;
    if !resp.status().is_success() {
        return Err(FetchError::Status {
            endpoint: path.to_string(),
            status: resp.status().as_u16(),
        });
    }
    resp.json::<T>().await.map_err(|e| FetchError::Decode {
        endpoint: path.to_string(),
        message: e.to_string(),
    })
}

/// Fetch one month's projects. Any failure is logged and becomes an
/// empty list — aggregation always runs over a real collection. The
/// returned flag tells "fetch worked" apart from "month is empty".
pub async fn fetch_projects_for_month(
    api_url: &str,
    year: i32,
    month: u32,
) -> (bool, Vec<ProjectRecord>) {
    let query = [("year", year.to_string()), ("month", month.to_string())];
    fetch_envelope(api_url, "/v1/projects/month", &query).await
}

/// Fetch the full project list, same empty-on-failure contract.
pub async fn fetch_projects(api_url: &str) -> (bool, Vec<ProjectRecord>) {
    fetch_envelope(api_url, "/v1/projects", &[]).await
}

async fn fetch_envelope(
    api_url: &str,
    path: &str,
    query: &[(&str, String)],
) -> (bool, Vec<ProjectRecord>) {
    match get_json::<ProjectsEnvelope>(api_url, path, query).await {
        Ok(envelope) => {
            let success = envelope.success;
            if !success {
                tracing::warn!(endpoint = path, "backend reported success=false");
            }
            (success, envelope.into_projects())
        }
        Err(err) => {
            tracing::warn!(error = %err, "project fetch failed; continuing with an empty list");
            (false, Vec::new())
        }
    }
}

/// Fetch a named monthly series (income, expenses, project counts).
pub async fn fetch_named_series(api_url: &str, kind: &str) -> (bool, NamedSeries) {
    match get_json::<NamedSeries>(api_url, &format!("/v1/stats/monthly/{kind}"), &[]).await {
        Ok(series) => (true, series),
        Err(err) => {
            tracing::warn!(error = %err, kind, "series fetch failed; using an empty series");
            (false, NamedSeries::default())
        }
    }
}

/// Fetch the expense-by-category breakdown for the pie chart.
pub async fn fetch_expense_categories(api_url: &str) -> (bool, CategoryBreakdown) {
    match get_json::<CategoryBreakdown>(api_url, "/v1/stats/expense-categories", &[]).await {
        Ok(breakdown) => (true, breakdown),
        Err(err) => {
            tracing::warn!(error = %err, "category fetch failed; using an empty breakdown");
            (false, CategoryBreakdown::default())
        }
    }
}
