//! Normalization of raw calendar events into page-ready records.

use chrono::Days;

use crate::error::{PageError, PageResult};
use crate::event::{Event, EventSpan, EventTime, RawEvent};

/// Label used when the source omits the event location.
pub const DEFAULT_LOCATION: &str = "EVL";

/// Build a normalized [`Event`] from one raw calendar event.
///
/// Pulls the image directive out of the description, converts the exclusive
/// whole-day end date into an inclusive one, and falls back to
/// [`DEFAULT_LOCATION`] when the source has no usable location. A start/end
/// kind mismatch is a [`PageError::MalformedEvent`]; the caller decides
/// whether to skip the record or abort.
pub fn extract_event(raw: RawEvent) -> PageResult<Event> {
    let title = raw.summary;
    let (image, description) = split_image_directive(&raw.description);

    let span = match (raw.start, raw.end) {
        (EventTime::Date(start), EventTime::Date(end)) => {
            // DTEND of a whole-day event is exclusive; store the last day
            let end = end.checked_sub_days(Days::new(1)).ok_or_else(|| {
                PageError::MalformedEvent(format!("'{title}': end date out of range"))
            })?;
            EventSpan::WholeDay { start, end }
        }
        (EventTime::DateTime(start), EventTime::DateTime(end)) => EventSpan::Timed { start, end },
        _ => {
            return Err(PageError::MalformedEvent(format!(
                "'{title}': start and end are not of the same kind"
            )));
        }
    };

    let location = raw
        .location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    Ok(Event {
        title,
        image,
        description,
        location,
        span,
    })
}

/// Split the image directive off the front of a description.
///
/// `image: <url>` on the first line takes the remainder of that line; a bare
/// `image:` first line takes the second line instead. Matching is
/// case-insensitive on the trimmed first line; the kept lines stay verbatim.
fn split_image_directive(description: &str) -> (Option<String>, String) {
    let (first, rest) = split_first_line(description);
    let first = first.trim();

    if first.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("image: ")) {
        (Some(first[7..].trim().to_string()), rest.to_string())
    } else if first.eq_ignore_ascii_case("image:") && !rest.is_empty() {
        let (second, remainder) = split_first_line(rest);
        (Some(second.trim().to_string()), remainder.to_string())
    } else {
        (None, description.to_string())
    }
}

fn split_first_line(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((line, rest)) => (line, rest),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn whole_day_raw(description: &str, location: Option<&str>) -> RawEvent {
        RawEvent {
            summary: "Grande fête".to_string(),
            description: description.to_string(),
            location: location.map(|l| l.to_string()),
            start: EventTime::Date(date(2024, 6, 1)),
            end: EventTime::Date(date(2024, 6, 3)),
        }
    }

    #[test]
    fn image_directive_single_line_form() {
        let event = extract_event(whole_day_raw(
            "Image: http://x/y.png \nOn danse.\nOn mange.",
            Some("La grange"),
        ))
        .unwrap();

        assert_eq!(event.image.as_deref(), Some("http://x/y.png"));
        assert_eq!(event.description, "On danse.\nOn mange.");
    }

    #[test]
    fn image_directive_two_line_form() {
        let event =
            extract_event(whole_day_raw("image:\n http://x/y.png\nOn danse.", None)).unwrap();

        assert_eq!(event.image.as_deref(), Some("http://x/y.png"));
        assert_eq!(event.description, "On danse.");
    }

    #[test]
    fn description_without_directive_kept_unmodified() {
        let event = extract_event(whole_day_raw("Une image: non.\nOn danse.", None)).unwrap();

        assert_eq!(event.image, None);
        assert_eq!(event.description, "Une image: non.\nOn danse.");
    }

    #[test]
    fn bare_directive_without_second_line_is_no_image() {
        let event = extract_event(whole_day_raw("image:", None)).unwrap();

        assert_eq!(event.image, None);
        assert_eq!(event.description, "image:");
    }

    #[test]
    fn whole_day_end_becomes_inclusive() {
        let event = extract_event(whole_day_raw("On danse.", None)).unwrap();

        assert_eq!(
            event.span,
            EventSpan::WholeDay {
                start: date(2024, 6, 1),
                end: date(2024, 6, 2),
            }
        );
        assert!(event.span.wholeday());
    }

    #[test]
    fn timed_bounds_taken_as_is() {
        let start = date(2024, 6, 1).and_hms_opt(18, 0, 0).unwrap();
        let end = date(2024, 6, 1).and_hms_opt(21, 30, 0).unwrap();
        let event = extract_event(RawEvent {
            summary: "Atelier".to_string(),
            description: String::new(),
            location: None,
            start: EventTime::DateTime(start),
            end: EventTime::DateTime(end),
        })
        .unwrap();

        assert_eq!(event.span, EventSpan::Timed { start, end });
        assert!(!event.span.wholeday());
    }

    #[test]
    fn mismatched_kinds_are_rejected() {
        let result = extract_event(RawEvent {
            summary: "Bancal".to_string(),
            description: String::new(),
            location: None,
            start: EventTime::Date(date(2024, 6, 1)),
            end: EventTime::DateTime(date(2024, 6, 1).and_hms_opt(18, 0, 0).unwrap()),
        });

        assert!(matches!(result, Err(PageError::MalformedEvent(_))));
    }

    #[test]
    fn location_falls_back_when_absent_or_blank() {
        let absent = extract_event(whole_day_raw("On danse.", None)).unwrap();
        assert_eq!(absent.location, DEFAULT_LOCATION);

        let blank = extract_event(whole_day_raw("On danse.", Some("   "))).unwrap();
        assert_eq!(blank.location, DEFAULT_LOCATION);

        let given = extract_event(whole_day_raw("On danse.", Some("La grange"))).unwrap();
        assert_eq!(given.location, "La grange");
    }

    #[test]
    fn whole_scenario_from_raw_to_record() {
        let event = extract_event(whole_day_raw("image: http://x/y.png\nA fête.", None)).unwrap();

        assert_eq!(
            event,
            Event {
                title: "Grande fête".to_string(),
                image: Some("http://x/y.png".to_string()),
                description: "A fête.".to_string(),
                location: DEFAULT_LOCATION.to_string(),
                span: EventSpan::WholeDay {
                    start: date(2024, 6, 1),
                    end: date(2024, 6, 2),
                },
            }
        );
    }
}
