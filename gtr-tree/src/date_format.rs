//! GTR date formatting
//!
//! genealogytree expects dates as `(CAL)YYYY[-MM[-DD]]` where the calendar
//! token is `AD` or `BC`, prefixed with `ca` for uncertain dates. Periods
//! and ranges join two dates with `/`; open-ended qualifiers leave one
//! side of the `/` empty.

use gtr_gedcom::{CalendarDate, DateValue};

/// Format a date value as a GTR date expression
///
/// Phrase-only values have no GTR representation and format as the empty
/// string. Interpreted dates format like uncertain dates; their phrase is
/// dropped.
pub fn format_date_value(value: &DateValue) -> String {
    match value {
        DateValue::Simple(date) => format_date(date, false),
        DateValue::Period { from, to } | DateValue::Range { from, to } => {
            format!("{}/{}", format_date(from, false), format_date(to, false))
        }
        DateValue::From(date) | DateValue::After(date) => {
            format!("{}/", format_date(date, false))
        }
        DateValue::To(date) | DateValue::Before(date) => {
            format!("/{}", format_date(date, false))
        }
        DateValue::About(date)
        | DateValue::Calculated(date)
        | DateValue::Estimated(date)
        | DateValue::Interpreted { date, .. } => format_date(date, true),
        DateValue::Phrase(_) => String::new(),
    }
}

/// Format one calendar date, resolving the era token from the year's sign
fn format_date(date: &CalendarDate, uncertain: bool) -> String {
    let mut calendar = if date.year < 0 { "BC" } else { "AD" }.to_string();
    if uncertain {
        calendar = format!("ca{}", calendar);
    }
    let mut timestamp = date.year.abs().to_string();
    if let Some(month) = date.month {
        timestamp.push_str(&format!("-{:02}", month));
        if let Some(day) = date.day {
            timestamp.push_str(&format!("-{:02}", day));
        }
    }
    format!("({}){}", calendar, timestamp)
}
