//! One-shot read of the configured calendar.

use anyhow::{Context, Result};
use evlpage_core::RawEvent;
use evlpage_core::config::AccessConfig;
use evlpage_core::error::PageError;
use evlpage_core::ics::parse_event;
use libdav::caldav::{FindCalendarHomeSet, GetCalendarResources};
use owo_colors::OwoColorize;

use crate::caldav::{ListCalendars, create_client};

/// Fetch every event of the configured calendar as raw events.
///
/// Discovery walks principal → calendar home set → calendar collections and
/// picks the collection whose display name matches `config.calendar`.
/// Resources that cannot be read or parsed are skipped with a warning; the
/// rest keep their server order.
pub async fn fetch_raw_events(config: &AccessConfig) -> Result<Vec<RawEvent>> {
    let caldav = create_client(&config.url, &config.username, &config.password)?;

    let principal = caldav
        .find_current_user_principal()
        .await
        .context("Failed to find current user principal")?
        .ok_or_else(|| {
            anyhow::anyhow!("CalDAV authentication failed. Check your username and password.")
        })?;

    let home_set = caldav
        .request(FindCalendarHomeSet::new(principal.path()))
        .await
        .context("Failed to find calendar home set")?
        .home_sets
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No calendar home set found for this account"))?;

    let listing = caldav
        .request(ListCalendars::new(home_set.path()))
        .await
        .map_err(|e| PageError::CalDav(e.to_string()))
        .context("Failed to list calendars")?;

    let calendar = listing
        .calendars
        .into_iter()
        .find(|c| c.name.as_deref() == Some(config.calendar.as_str()))
        .ok_or_else(|| {
            PageError::CalendarNotFound(format!(
                "no calendar \"{}\" at {}",
                config.calendar, config.url
            ))
        })?;

    let response = caldav
        .request(GetCalendarResources::new(&calendar.href))
        .await
        .map_err(|e| PageError::CalDav(e.to_string()))
        .context("Failed to fetch calendar resources")?;

    let mut events = Vec::new();
    for resource in response.resources {
        match resource.content {
            Ok(content) => match parse_event(&content.data) {
                Some(raw) => events.push(raw),
                None => eprintln!(
                    "{}",
                    format!("Skipping unparseable resource {}", resource.href).yellow()
                ),
            },
            Err(err) => eprintln!(
                "{}",
                format!("Skipping resource {}: {}", resource.href, err).yellow()
            ),
        }
    }

    Ok(events)
}
