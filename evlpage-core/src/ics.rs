//! ICS parsing using the icalendar crate's parser.

use icalendar::{
    DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::event::{EventTime, RawEvent};

/// Parse one CalDAV resource payload into a raw event.
///
/// Returns `None` when the payload carries no VEVENT or the VEVENT lacks
/// SUMMARY, DTSTART or DTEND.
pub fn parse_event(content: &str) -> Option<RawEvent> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    let summary = unescape_ics_value(vevent.find_prop("SUMMARY")?.val.as_ref());
    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| unescape_ics_value(p.val.as_ref()))
        .unwrap_or_default();
    let location = vevent
        .find_prop("LOCATION")
        .map(|p| unescape_ics_value(p.val.as_ref()));

    let start = to_event_time(DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?);
    let end = to_event_time(DatePerhapsTime::try_from(vevent.find_prop("DTEND")?).ok()?);

    Some(RawEvent {
        summary,
        description,
        location,
        start,
        end,
    })
}

/// Convert icalendar's DatePerhapsTime to our EventTime.
///
/// Date-times keep their wall-clock fields: UTC values drop the marker,
/// zoned values keep their local reading.
fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => EventTime::DateTime(dt.naive_utc()),
            icalendar::CalendarDateTime::Floating(naive) => EventTime::DateTime(naive),
            icalendar::CalendarDateTime::WithTimezone { date_time, .. } => {
                EventTime::DateTime(date_time)
            }
        },
    }
}

/// Unescape ICS property values per RFC 5545
/// Reverses: \, → , and \; → ; and \\ → \ and \n → newline
fn unescape_ics_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(',') => {
                    result.push(',');
                    chars.next();
                }
                Some(';') => {
                    result.push(';');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('n') | Some('N') => {
                    result.push('\n');
                    chars.next();
                }
                _ => result.push(c), // Keep backslash if not a recognized escape
            }
        } else {
            result.push(c);
        }
    }

    result
}
