//! Display formatting with explicitly pinned it-IT rules so output is
//! bit-identical on every platform: thousands separated by `.`, decimal
//! comma, two digits, `DD/MM/YYYY` dates.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use crate::agenda::parse_clock;
use crate::models::{ExpenseFrequency, RenovationStatus};

/// Categories offered by the expense dialog.
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Casa",
    "Alimentari",
    "Utenze",
    "Trasporti",
    "Salute",
    "Istruzione",
    "Benessere",
    "Intrattenimento",
    "Abbigliamento",
    "Altro",
];

/// Appointment categories as (value, label) pairs; the value is what goes
/// over the wire.
pub const APPOINTMENT_CATEGORIES: [(&str, &str); 6] = [
    ("medico", "Medico"),
    ("lavoro", "Lavoro"),
    ("scuola", "Scuola"),
    ("famiglia", "Famiglia"),
    ("commissioni", "Commissioni"),
    ("altro", "Altro"),
];

/// Reminder lead-time choices, in minutes.
pub const MINUTES_OPTIONS: [(u32, &str); 7] = [
    (15, "15 minuti prima"),
    (30, "30 minuti prima"),
    (60, "1 ora prima"),
    (120, "2 ore prima"),
    (360, "6 ore prima"),
    (1440, "1 giorno prima"),
    (2880, "2 giorni prima"),
];

pub fn appointment_category_label(value: &str) -> &str {
    APPOINTMENT_CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

pub fn frequency_label(frequency: ExpenseFrequency) -> &'static str {
    match frequency {
        ExpenseFrequency::Monthly => "Mensile",
        ExpenseFrequency::Bimonthly => "Bimestrale",
        ExpenseFrequency::Custom => "Personalizzata",
    }
}

pub fn renovation_status_label(status: RenovationStatus) -> &'static str {
    match status {
        RenovationStatus::Planned => "Pianificato",
        RenovationStatus::InProgress => "In corso",
        RenovationStatus::Completed => "Completato",
        RenovationStatus::OnHold => "Sospeso",
    }
}

pub fn month_name_it(month: u32) -> &'static str {
    match month {
        1 => "gennaio",
        2 => "febbraio",
        3 => "marzo",
        4 => "aprile",
        5 => "maggio",
        6 => "giugno",
        7 => "luglio",
        8 => "agosto",
        9 => "settembre",
        10 => "ottobre",
        11 => "novembre",
        12 => "dicembre",
        _ => "gennaio",
    }
}

pub fn weekday_name_it(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunedì",
        Weekday::Tue => "martedì",
        Weekday::Wed => "mercoledì",
        Weekday::Thu => "giovedì",
        Weekday::Fri => "venerdì",
        Weekday::Sat => "sabato",
        Weekday::Sun => "domenica",
    }
}

/// `1234.5` → `"1.234,50"`.
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// `1234.5` → `"1.234,50 €"`.
pub fn format_currency(amount: f64) -> String {
    format!("{} €", format_number(amount))
}

/// Any accepted timestamp → `DD/MM/YYYY`. Unparseable input is returned
/// unchanged so stale data still renders something.
pub fn format_date(raw: &str) -> String {
    match parse_clock(raw) {
        Some(dt) => format_date_naive(dt.date()),
        None => raw.to_string(),
    }
}

pub fn format_date_naive(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// `HH:MM` clock time of a timestamp.
pub fn format_time(raw: &str) -> String {
    match parse_clock(raw) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => String::new(),
    }
}

/// Value for an `<input type="date">`: `YYYY-MM-DD`, empty when absent.
pub fn format_date_input(raw: &str) -> String {
    match parse_clock(raw) {
        Some(dt) => dt.date().format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Value for an `<input type="datetime-local">`: `YYYY-MM-DDTHH:MM`.
pub fn format_datetime_input(raw: &str) -> String {
    match parse_clock(raw) {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0,00");
        assert_eq!(format_number(12.5), "12,50");
        assert_eq!(format_number(1234.5), "1.234,50");
        assert_eq!(format_number(1234567.891), "1.234.567,89");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.5), "-1.234,50");
    }

    #[test]
    fn test_format_currency_golden() {
        assert_eq!(format_currency(1234.5), "1.234,50 €");
        assert_eq!(format_currency(-0.5), "-0,50 €");
    }

    #[test]
    fn test_format_date_accepts_rfc3339_and_plain_dates() {
        assert_eq!(format_date("2026-03-02T10:30:00.000Z"), "02/03/2026");
        assert_eq!(format_date("2026-12-24"), "24/12/2026");
        assert_eq!(format_date("non-una-data"), "non-una-data");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-03-02T09:05:00.000Z"), "09:05");
        assert_eq!(format_time("garbage"), "");
    }

    #[test]
    fn test_input_formats() {
        assert_eq!(format_date_input("2026-03-02T10:30:00.000Z"), "2026-03-02");
        assert_eq!(
            format_datetime_input("2026-03-02T10:30:00.000Z"),
            "2026-03-02T10:30"
        );
        assert_eq!(format_datetime_input(""), "");
    }
}
