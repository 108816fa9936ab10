//! Event types for the page pipeline.
//!
//! `RawEvent` is what the calendar store delivers; `Event` is the immutable
//! record the formatter and renderer work with.

use chrono::{NaiveDate, NaiveDateTime};

/// A start or end instant as delivered by the calendar store.
#[derive(Debug, Clone, PartialEq)]
pub enum EventTime {
    /// Date-only value (VALUE=DATE), used by whole-day events.
    Date(NaiveDate),
    /// Wall-clock date-time; no timezone conversion is applied.
    DateTime(NaiveDateTime),
}

/// One raw calendar event, straight out of the remote store.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub summary: String,
    pub description: String,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

/// A normalized event, ready for formatting.
///
/// Built once by [`crate::extract::extract_event`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    /// Illustration pulled out of the description's image directive.
    pub image: Option<String>,
    /// Description with any image directive lines removed.
    pub description: String,
    pub location: String,
    pub span: EventSpan,
}

/// Start and end of an event. Both bounds always share one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum EventSpan {
    /// Date-only bounds. `end` is the inclusive last day, converted from the
    /// exclusive DTEND during extraction.
    WholeDay { start: NaiveDate, end: NaiveDate },
    /// Wall-clock bounds, taken from the store as-is.
    Timed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl EventSpan {
    pub fn wholeday(&self) -> bool {
        matches!(self, EventSpan::WholeDay { .. })
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            EventSpan::WholeDay { start, .. } => *start,
            EventSpan::Timed { start, .. } => start.date(),
        }
    }

    pub fn end_date(&self) -> NaiveDate {
        match self {
            EventSpan::WholeDay { end, .. } => *end,
            EventSpan::Timed { end, .. } => end.date(),
        }
    }

    /// Whether start and end fall on different calendar days, independent of
    /// any time-of-day component.
    pub fn spans_multiple_days(&self) -> bool {
        self.start_date() != self.end_date()
    }
}
