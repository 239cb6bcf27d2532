use chrono::Utc;
use serde_json::json;

use shutterdesk_core::charts::{ChartData, PieChartData};
use shutterdesk_core::series::{ROLLING_WINDOW_MONTHS, align};

use crate::util;

pub async fn run(api_url: &str) -> i32 {
    let today = Utc::now().date_naive();

    let (income_ok, income) = util::fetch_named_series(api_url, "income").await;
    let (expenses_ok, expenses) = util::fetch_named_series(api_url, "expenses").await;
    let (counts_ok, counts) = util::fetch_named_series(api_url, "projects").await;
    let (categories_ok, categories) = util::fetch_expense_categories(api_url).await;

    let income_chart: ChartData = align(&income, ROLLING_WINDOW_MONTHS, today).into();
    let expense_chart: ChartData = align(&expenses, ROLLING_WINDOW_MONTHS, today).into();
    let count_chart: ChartData = align(&counts, ROLLING_WINDOW_MONTHS, today).into();
    let category_pie: PieChartData = categories.into();

    util::print_json(&json!({
        "success": income_ok && expenses_ok && counts_ok && categories_ok,
        "income": income_chart,
        "expenses": expense_chart,
        "projectCounts": count_chart,
        "expenseCategories": category_pie,
    }))
}
