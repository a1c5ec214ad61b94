//! Appointment partitioning and date-range filtering. The reference
//! instant is always passed in explicitly so these stay pure and the
//! wall-clock read happens once, at the UI boundary.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::format::{month_name_it, weekday_name_it};
use crate::models::Appointment;

/// Quick filters offered above the upcoming list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFilter {
    All,
    Today,
    Week,
    Month,
}

impl RangeFilter {
    pub const ALL: [RangeFilter; 4] = [
        RangeFilter::All,
        RangeFilter::Today,
        RangeFilter::Week,
        RangeFilter::Month,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RangeFilter::All => "Tutti",
            RangeFilter::Today => "Oggi",
            RangeFilter::Week => "Questa settimana",
            RangeFilter::Month => "Questo mese",
        }
    }
}

/// Parse an appointment's start into local clock time. Accepts RFC 3339
/// (offset kept as the local clock), bare datetimes, and date-only strings.
pub fn appointment_start(appointment: &Appointment) -> Option<NaiveDateTime> {
    parse_clock(&appointment.start_date)
}

pub fn parse_clock(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Split into (upcoming, past) around `now`. Start exactly at `now` counts
/// as upcoming. Unparseable dates land in past so they stay visible but
/// out of the main list.
pub fn partition_upcoming(
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> (Vec<Appointment>, Vec<Appointment>) {
    appointments
        .iter()
        .cloned()
        .partition(|a| matches!(appointment_start(a), Some(start) if start >= now))
}

/// Keep the appointments whose start falls inside the filter window.
/// `Today` covers the full calendar day; `Week` extends the upper bound to
/// start-of-today + 7 days (midnight, inclusive); `Month` to +1 calendar
/// month.
pub fn filter_by_range(
    appointments: &[Appointment],
    filter: RangeFilter,
    today: NaiveDate,
) -> Vec<Appointment> {
    let start = today.and_time(NaiveTime::MIN);
    let in_window = |a: &Appointment| -> bool {
        let Some(when) = appointment_start(a) else {
            return false;
        };
        match filter {
            RangeFilter::All => true,
            RangeFilter::Today => when >= start && when < start + Duration::days(1),
            RangeFilter::Week => when >= start && when <= start + Duration::days(7),
            RangeFilter::Month => {
                let end = today
                    .checked_add_months(Months::new(1))
                    .unwrap_or(today)
                    .and_time(NaiveTime::MIN);
                when >= start && when <= end
            }
        }
    };
    appointments.iter().filter(|a| in_window(a)).cloned().collect()
}

/// Group appointments by the calendar day they start on, days in
/// ascending order, arrival order kept within a day.
pub fn group_by_day(appointments: &[Appointment]) -> Vec<(NaiveDate, Vec<Appointment>)> {
    let mut groups: Vec<(NaiveDate, Vec<Appointment>)> = Vec::new();
    for appointment in appointments {
        let Some(start) = appointment_start(appointment) else {
            continue;
        };
        let day = start.date();
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, bucket)) => bucket.push(appointment.clone()),
            None => groups.push((day, vec![appointment.clone()])),
        }
    }
    groups.sort_by_key(|(day, _)| *day);
    groups
}

/// Human label for a day group: "Oggi — giovedì 7 agosto",
/// "Domani — venerdì 8 agosto", otherwise "Venerdì 8 agosto".
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    let base = format!(
        "{} {} {}",
        weekday_name_it(day.weekday()),
        day.day(),
        month_name_it(day.month())
    );
    if day == today {
        format!("Oggi — {base}")
    } else if day == today + Duration::days(1) {
        format!("Domani — {base}")
    } else {
        let mut chars = base.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, start_date: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            title: format!("Appuntamento {id}"),
            description: None,
            start_date: start_date.to_string(),
            end_date: None,
            notes: None,
            category: "altro".into(),
            member_id: None,
            member: None,
            notifications: vec![],
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_partition_upcoming_boundary_is_inclusive() {
        let now = today().and_hms_opt(12, 0, 0).unwrap();
        let list = vec![
            appointment("past", "2026-08-07T11:59:00.000Z"),
            appointment("boundary", "2026-08-07T12:00:00.000Z"),
            appointment("future", "2026-08-09T09:00:00.000Z"),
        ];
        let (upcoming, past) = partition_upcoming(&list, now);
        assert_eq!(
            upcoming.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["boundary", "future"]
        );
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, "past");
    }

    #[test]
    fn test_filter_today_covers_full_day() {
        let list = vec![
            appointment("early", "2026-08-07T00:00:00.000Z"),
            appointment("late", "2026-08-07T23:30:00.000Z"),
            appointment("tomorrow", "2026-08-08T00:00:00.000Z"),
        ];
        let filtered = filter_by_range(&list, RangeFilter::Today, today());
        assert_eq!(
            filtered.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["early", "late"]
        );
    }

    #[test]
    fn test_filter_week_upper_bound_is_start_plus_seven_days() {
        let list = vec![
            appointment("in", "2026-08-13T18:00:00.000Z"),
            appointment("edge", "2026-08-14T00:00:00.000Z"),
            appointment("out", "2026-08-14T00:01:00.000Z"),
        ];
        let filtered = filter_by_range(&list, RangeFilter::Week, today());
        assert_eq!(
            filtered.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["in", "edge"]
        );
    }

    #[test]
    fn test_filter_month_uses_calendar_month() {
        let list = vec![
            appointment("in", "2026-09-06T10:00:00.000Z"),
            appointment("edge", "2026-09-07T00:00:00.000Z"),
            appointment("out", "2026-09-08T10:00:00.000Z"),
        ];
        let filtered = filter_by_range(&list, RangeFilter::Month, today());
        assert_eq!(
            filtered.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["in", "edge"]
        );
    }

    #[test]
    fn test_group_by_day_orders_days_ascending() {
        let list = vec![
            appointment("b", "2026-08-09T09:00:00.000Z"),
            appointment("a", "2026-08-08T10:00:00.000Z"),
            appointment("c", "2026-08-08T15:00:00.000Z"),
        ];
        let groups = group_by_day(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert_eq!(
            groups[0].1.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(groups[1].1[0].id, "b");
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(day_label(today(), today()), "Oggi — venerdì 7 agosto");
        assert_eq!(
            day_label(today() + Duration::days(1), today()),
            "Domani — sabato 8 agosto"
        );
        assert_eq!(
            day_label(today() + Duration::days(3), today()),
            "Lunedì 10 agosto"
        );
    }
}
