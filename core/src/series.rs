use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of months every dashboard chart window shows.
pub const ROLLING_WINDOW_MONTHS: usize = 5;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A labelled monthly series as the backend reports it: long-form month
/// names plus one value per label. Gaps and ordering are the backend's
/// business; [`align`] normalizes both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A fixed-length, chronologically contiguous window ending at the
/// current month. Labels are 3-letter abbreviations, oldest first;
/// months the source does not cover are zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RollingWindowSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Project a named series onto the `window` calendar months ending at
/// `today`'s month.
///
/// Source values are looked up by long month name, case-insensitively,
/// first match wins. The lookup carries the backend's one-year horizon
/// assumption: labels are names only, so a source spanning more than
/// twelve months would alias same-named months onto one slot.
///
/// Output length is always exactly `window` — an empty source yields all
/// zeros, a source longer than the window contributes only the months
/// the window covers. Chart layout never depends on how much data the
/// backend happened to have.
pub fn align(series: &NamedSeries, window: usize, today: NaiveDate) -> RollingWindowSeries {
    let mut labels = Vec::with_capacity(window);
    let mut values = Vec::with_capacity(window);

    for offset in (0..window).rev() {
        let idx = (today.month0() as i64 - offset as i64).rem_euclid(12) as usize;
        let month = MONTH_NAMES[idx];
        let value = series
            .labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(month))
            .and_then(|i| series.values.get(i).copied())
            .unwrap_or(0.0);
        labels.push(month[..3].to_string());
        values.push(value);
    }

    RollingWindowSeries { labels, values }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{NamedSeries, ROLLING_WINDOW_MONTHS, align};

    fn series(labels: &[&str], values: &[f64]) -> NamedSeries {
        NamedSeries {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    fn today(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sparse_series_zero_fills_missing_months() {
        let aligned = align(
            &series(&["January", "March"], &[10.0, 30.0]),
            ROLLING_WINDOW_MONTHS,
            today(2024, 4, 15),
        );
        assert_eq!(aligned.labels, ["Dec", "Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(aligned.values, [0.0, 10.0, 0.0, 30.0, 0.0]);
    }

    #[test]
    fn empty_source_still_fills_the_window() {
        let aligned = align(&NamedSeries::default(), ROLLING_WINDOW_MONTHS, today(2024, 4, 15));
        assert_eq!(aligned.labels.len(), ROLLING_WINDOW_MONTHS);
        assert_eq!(aligned.values, [0.0; 5]);
    }

    #[test]
    fn source_months_outside_the_window_are_ignored() {
        let aligned = align(
            &series(
                &["June", "July", "August", "September", "October", "November"],
                &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            ),
            3,
            today(2024, 8, 1),
        );
        assert_eq!(aligned.labels, ["Jun", "Jul", "Aug"]);
        assert_eq!(aligned.values, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn window_wraps_the_year_boundary() {
        let aligned = align(
            &series(&["December", "January"], &[12.0, 1.0]),
            ROLLING_WINDOW_MONTHS,
            today(2025, 1, 10),
        );
        assert_eq!(aligned.labels, ["Sep", "Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(aligned.values, [0.0, 0.0, 0.0, 12.0, 1.0]);
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        let aligned = align(
            &series(&["january", "FEBRUARY"], &[7.0, 8.0]),
            2,
            today(2024, 2, 1),
        );
        assert_eq!(aligned.values, [7.0, 8.0]);
    }

    #[test]
    fn mismatched_label_and_value_lengths_fall_back_to_zero() {
        // "February" has a label slot but no value behind it.
        let aligned = align(&series(&["January", "February"], &[5.0]), 2, today(2024, 2, 1));
        assert_eq!(aligned.values, [5.0, 0.0]);
    }
}
