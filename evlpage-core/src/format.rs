//! French prose fragments for one event.

use chrono::{Datelike, Timelike};

use crate::event::{Event, EventSpan};

/// French month names, indexed by `month - 1`.
const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Month name for a 1-indexed month. Panics outside [1, 12].
fn month_name(month: u32) -> &'static str {
    MONTHS[month as usize - 1]
}

/// The location/date sentence for an event.
///
/// Hours and minutes render unpadded ("18h0" for 18:00). A multi-day
/// whole-day stretch names its start date only.
pub fn when_sentence(event: &Event) -> String {
    let location = &event.location;
    match &event.span {
        EventSpan::WholeDay { start, end } if start == end => format!(
            "{location}, le {} {} {}",
            start.day(),
            month_name(start.month()),
            start.year()
        ),
        EventSpan::WholeDay { start, .. } => format!(
            "{location}, du {} {} {}",
            start.day(),
            month_name(start.month()),
            start.year()
        ),
        EventSpan::Timed { start, end } if !event.span.spans_multiple_days() => format!(
            "{location}, le {} {} {}, de {}h{} à {}h{}",
            start.day(),
            month_name(start.month()),
            start.year(),
            start.hour(),
            start.minute(),
            end.hour(),
            end.minute()
        ),
        EventSpan::Timed { start, end } => format!(
            "{location}, du {} {} {} à {}h{}, au {} {} {} à {}h{}",
            start.day(),
            month_name(start.month()),
            start.year(),
            start.hour(),
            start.minute(),
            end.day(),
            month_name(end.month()),
            end.year(),
            end.hour(),
            end.minute()
        ),
    }
}

/// Markdown paragraphs for one event: heading, optional illustration, the
/// location/date sentence, then the description.
pub fn event_paragraphs(event: &Event) -> Vec<String> {
    let mut paragraphs = vec![format!("## {}", event.title)];
    if let Some(image) = &event.image {
        paragraphs.push(format!("![image d'illustration]({image})"));
    }
    paragraphs.push(when_sentence(event));
    paragraphs.push(event.description.clone());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_with_span(span: EventSpan) -> Event {
        Event {
            title: "Grande fête".to_string(),
            image: None,
            description: "On danse.".to_string(),
            location: "EVL".to_string(),
            span,
        }
    }

    #[test]
    fn single_whole_day() {
        let event = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        });

        assert_eq!(when_sentence(&event), "EVL, le 1 juin 2024");
    }

    #[test]
    fn multi_day_whole_day_names_start_only() {
        let event = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 2),
        });

        let sentence = when_sentence(&event);
        assert_eq!(sentence, "EVL, du 1 juin 2024");
        assert!(!sentence.contains("2 juin"), "end date must not be echoed");
    }

    #[test]
    fn template_flips_when_end_moves_to_next_day() {
        let single = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        });
        let multi = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 2),
        });

        assert!(when_sentence(&single).contains(", le "));
        assert!(when_sentence(&multi).contains(", du "));
    }

    #[test]
    fn same_day_timed_with_unpadded_minutes() {
        let mut event = event_with_span(EventSpan::Timed {
            start: date(2024, 6, 1).and_hms_opt(18, 0, 0).unwrap(),
            end: date(2024, 6, 1).and_hms_opt(21, 30, 0).unwrap(),
        });
        event.location = "La grange".to_string();

        assert_eq!(
            when_sentence(&event),
            "La grange, le 1 juin 2024, de 18h0 à 21h30"
        );
    }

    #[test]
    fn timed_spanning_two_days() {
        let event = event_with_span(EventSpan::Timed {
            start: date(2024, 12, 31).and_hms_opt(20, 0, 0).unwrap(),
            end: date(2025, 1, 1).and_hms_opt(2, 0, 0).unwrap(),
        });

        assert_eq!(
            when_sentence(&event),
            "EVL, du 31 décembre 2024 à 20h0, au 1 janvier 2025 à 2h0"
        );
    }

    #[test]
    fn paragraphs_in_fixed_order() {
        let mut event = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        });
        event.image = Some("http://x/y.png".to_string());

        let paragraphs = event_paragraphs(&event);

        assert_eq!(
            paragraphs,
            [
                "## Grande fête",
                "![image d'illustration](http://x/y.png)",
                "EVL, le 1 juin 2024",
                "On danse.",
            ]
        );
    }

    #[test]
    fn image_paragraph_absent_without_image() {
        let event = event_with_span(EventSpan::WholeDay {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        });

        let paragraphs = event_paragraphs(&event);

        assert_eq!(paragraphs.len(), 3);
        assert!(!paragraphs.iter().any(|p| p.starts_with("![")));
    }
}
