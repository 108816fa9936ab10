//! Past/upcoming classification.

use chrono::{Days, NaiveDate};

use crate::event::EventSpan;

/// Days an event stays out of the "past" bucket after its last day.
pub const GRACE_DAYS: u64 = 3;

/// Whether the event is past, date-granular with a grace window.
///
/// An event becomes past once its end date plus [`GRACE_DAYS`] has reached
/// `today`; the time-of-day of a timed end is ignored.
pub fn is_past(span: &EventSpan, today: NaiveDate) -> bool {
    match span.end_date().checked_add_days(Days::new(GRACE_DAYS)) {
        Some(cutoff) => cutoff <= today,
        None => false,
    }
}
