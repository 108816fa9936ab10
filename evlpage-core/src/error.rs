//! Error types for the evlpage generator.

use thiserror::Error;

/// Errors that can occur while generating the events page.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Malformed event {0}")]
    MalformedEvent(String),

    #[error("CalDAV error: {0}")]
    CalDav(String),
}

/// Result type alias for page generation.
pub type PageResult<T> = Result<T, PageError>;
