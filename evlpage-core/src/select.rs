//! Upcoming and recent-past selection.

use chrono::NaiveDate;

use crate::classify::is_past;
use crate::event::Event;

/// Cap on the number of past events kept for the page.
pub const RECENT_PAST_LIMIT: usize = 5;

/// Events not yet past, in calendar-store order.
pub fn upcoming(events: &[Event], today: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| !is_past(&e.span, today))
        .cloned()
        .collect()
}

/// The first [`RECENT_PAST_LIMIT`] past events, ascending by start date.
pub fn recent_past(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut past: Vec<Event> = events
        .iter()
        .filter(|e| is_past(&e.span, today))
        .cloned()
        .collect();
    past.sort_by_key(|e| e.span.start_date());
    past.truncate(RECENT_PAST_LIMIT);
    past
}
