use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dates::parse_calendar_day;
use crate::projects::ProjectRecord;
use crate::status::StatusClass;

/// Shoot-start marker color.
pub const COLOR_START: &str = "#4CAF50";
/// Shoot-end marker color.
pub const COLOR_END: &str = "#F44336";
/// Color for events of completed projects, start and end alike.
pub const COLOR_COMPLETED: &str = "#9E9E9E";

/// Which side of a shoot an event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    ProjectStart,
    ProjectEnd,
}

/// One calendar entry derived from a single shoot-date field.
/// Never mutated after creation; lifetime is one month-query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    pub color: String,
    pub is_completed: bool,
    pub description: String,
}

/// Day-indexed event map. An absent key means "no events that day";
/// within a day, events keep project iteration order.
pub type DayEventsMap = BTreeMap<NaiveDate, Vec<CalendarEvent>>;

/// A skipped-field note from aggregation. Not an error — the other date
/// field of the project and the rest of the month still aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregationWarning {
    /// Code of the project whose field was skipped
    pub project_code: String,
    /// Which raw field triggered the skip
    pub field: String,
    /// Human-readable description
    pub message: String,
}

/// Aggregation result: the day index plus whatever was skipped along the
/// way. Warnings ride in the result so tests and callers can observe
/// skips without string-matching log output.
#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct MonthEvents {
    #[schema(value_type = BTreeMap<String, Vec<CalendarEvent>>)]
    pub days: DayEventsMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AggregationWarning>,
}

/// Turn one month's project records into a day-indexed event map.
///
/// Each project contributes up to two events, one per parseable shoot
/// date. A malformed date skips only that event and leaves a warning;
/// an absent date is simply no event. Deterministic and idempotent:
/// the same input always produces a structurally identical result.
pub fn aggregate_month(projects: &[ProjectRecord]) -> MonthEvents {
    let mut events = MonthEvents::default();
    for project in projects {
        let class = project.status_class();
        push_event(&mut events, project, class, EventKind::ProjectStart);
        push_event(&mut events, project, class, EventKind::ProjectEnd);
    }
    events
}

fn push_event(
    events: &mut MonthEvents,
    project: &ProjectRecord,
    class: StatusClass,
    kind: EventKind,
) {
    let (field, raw) = match kind {
        EventKind::ProjectStart => ("shootStartDate", project.shoot_start_date.as_deref()),
        EventKind::ProjectEnd => ("shootEndDate", project.shoot_end_date.as_deref()),
    };
    // Absent is fine; only a present-but-unparseable field warrants a warning.
    let Some(raw) = raw else {
        return;
    };
    let Some(date) = parse_calendar_day(raw) else {
        events.warnings.push(AggregationWarning {
            project_code: project.code.clone(),
            field: field.to_string(),
            message: format!("unparseable date {raw:?}; event skipped"),
        });
        return;
    };
    events
        .days
        .entry(date)
        .or_default()
        .push(build_event(project, class, kind, date));
}

fn build_event(
    project: &ProjectRecord,
    class: StatusClass,
    kind: EventKind,
    date: NaiveDate,
) -> CalendarEvent {
    let phase = match kind {
        EventKind::ProjectStart => "Start",
        EventKind::ProjectEnd => "End",
    };
    let completed = class.is_completed();
    let color = if completed {
        COLOR_COMPLETED
    } else {
        match kind {
            EventKind::ProjectStart => COLOR_START,
            EventKind::ProjectEnd => COLOR_END,
        }
    };
    let mut description = format!("{} shoot {}", project.name, phase.to_ascii_lowercase());
    if completed {
        description.push_str(" (Completed)");
    }
    CalendarEvent {
        date,
        kind,
        title: format!("{} {phase}", project.code),
        color: color.to_string(),
        is_completed: completed,
        description,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::projects::ProjectRecord;

    use super::{COLOR_COMPLETED, COLOR_END, COLOR_START, EventKind, aggregate_month};

    fn project(
        code: &str,
        status: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> ProjectRecord {
        ProjectRecord {
            id: Uuid::now_v7(),
            code: code.to_string(),
            name: format!("{code} shoot"),
            status: status.map(str::to_string),
            shoot_start_date: start.map(str::to_string),
            shoot_end_date: end.map(str::to_string),
            amount: 0.0,
            pending_amount: None,
            received_amount: None,
            outsourcing: false,
            client_name: None,
            company: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn active_project_produces_green_start_and_red_end() {
        let events = aggregate_month(&[project(
            "PRJ001",
            Some("active"),
            Some("2024-02-15T10:00:00Z"),
            Some("2024-02-15T18:00:00Z"),
        )]);

        let on_day = &events.days[&day(2024, 2, 15)];
        assert_eq!(on_day.len(), 2);

        assert_eq!(on_day[0].kind, EventKind::ProjectStart);
        assert_eq!(on_day[0].title, "PRJ001 Start");
        assert_eq!(on_day[0].color, COLOR_START);
        assert!(!on_day[0].is_completed);

        assert_eq!(on_day[1].kind, EventKind::ProjectEnd);
        assert_eq!(on_day[1].title, "PRJ001 End");
        assert_eq!(on_day[1].color, COLOR_END);
        assert!(!on_day[1].is_completed);

        assert!(events.warnings.is_empty());
    }

    #[test]
    fn completed_project_is_grey_on_both_sides() {
        let events = aggregate_month(&[project(
            "PRJ002",
            Some("completed"),
            Some("2024-03-01"),
            Some("2024-03-02"),
        )]);

        for events_on_day in events.days.values() {
            for event in events_on_day {
                assert_eq!(event.color, COLOR_COMPLETED);
                assert!(event.is_completed);
                assert!(event.description.contains("(Completed)"));
            }
        }
    }

    #[test]
    fn invalid_start_skips_only_that_event() {
        let events = aggregate_month(&[
            project(
                "PRJ003",
                Some("active"),
                Some("invalid-date"),
                Some("2024-02-20T12:00:00Z"),
            ),
            project("PRJ004", Some("active"), Some("2024-02-21T09:00:00Z"), None),
        ]);

        // PRJ003 keeps its end event, PRJ004 is untouched.
        let total: usize = events.days.values().map(Vec::len).sum();
        assert_eq!(total, 2);
        assert_eq!(events.days[&day(2024, 2, 20)][0].kind, EventKind::ProjectEnd);
        assert_eq!(
            events.days[&day(2024, 2, 21)][0].kind,
            EventKind::ProjectStart
        );

        assert_eq!(events.warnings.len(), 1);
        assert_eq!(events.warnings[0].project_code, "PRJ003");
        assert_eq!(events.warnings[0].field, "shootStartDate");
    }

    #[test]
    fn absent_dates_are_not_warnings() {
        let events = aggregate_month(&[project("PRJ005", Some("pending"), None, None)]);
        assert!(events.days.is_empty());
        assert!(events.warnings.is_empty());
    }

    #[test]
    fn same_day_events_keep_input_order() {
        let events = aggregate_month(&[
            project("PRJ010", Some("active"), Some("2024-05-05"), None),
            project("PRJ011", Some("active"), Some("2024-05-05"), None),
        ]);

        let titles: Vec<&str> = events.days[&day(2024, 5, 5)]
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["PRJ010 Start", "PRJ011 Start"]);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let input = [
            project(
                "PRJ006",
                Some("finished"),
                Some("2024-04-10T08:00:00Z"),
                Some("broken"),
            ),
            project("PRJ007", None, Some("2024-04-10T09:00:00Z"), None),
        ];
        assert_eq!(aggregate_month(&input), aggregate_month(&input));
    }

    #[test]
    fn empty_input_aggregates_to_an_empty_map() {
        let events = aggregate_month(&[]);
        assert!(events.days.is_empty());
        assert!(events.warnings.is_empty());
    }

    #[test]
    fn serializes_with_iso_day_keys_and_kebab_case_types() {
        let events = aggregate_month(&[project(
            "PRJ001",
            Some("active"),
            Some("2024-02-15T10:00:00Z"),
            None,
        )]);
        let value = serde_json::to_value(&events).unwrap();

        let event = &value["days"]["2024-02-15"][0];
        assert_eq!(event["type"], "project-start");
        assert_eq!(event["isCompleted"], false);
        assert_eq!(event["color"], "#4CAF50");
        // No skipped fields, so the warnings key is omitted entirely.
        assert!(value.get("warnings").is_none());
    }
}
