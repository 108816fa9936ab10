//! Assembly of the final markdown page.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;
use crate::format::event_paragraphs;

const UPCOMING_HEADING: &str = "# Évènements publics à venir de l'EVL";
const PREVIOUS_HEADING: &str = "# Quelques évènements publics précédents";
const NO_UPCOMING: &str = "Il n'y aucun évènement public à venir dans l'écovillage… \
    Contactez nous [par mail](mailto:contact@ecovillage-la-lanterne.net) pour savoir pourquoi !";

/// The fixed metadata block Pelican reads at the top of the page.
fn metadata_header(today: NaiveDate) -> String {
    [
        "Title: Évènements".to_string(),
        format!("Date: {}-{}-{}", today.year(), today.month(), today.day()),
        "Tags: meta".to_string(),
        "Summary: les prochaines activités à l'écovillage !".to_string(),
        "Slug: calendrier".to_string(),
        "Status: published".to_string(),
    ]
    .join("\n")
}

/// Assemble the whole page: metadata header, the upcoming section (or the
/// fallback sentence when there is nothing to announce), and the previous
/// section when there is one.
pub fn render_page(upcoming: &[Event], previous: &[Event], today: NaiveDate) -> String {
    let mut paragraphs = vec![metadata_header(today)];

    if upcoming.is_empty() {
        paragraphs.push(NO_UPCOMING.to_string());
    } else {
        paragraphs.push(UPCOMING_HEADING.to_string());
        for event in upcoming {
            paragraphs.extend(event_paragraphs(event));
        }
    }

    if !previous.is_empty() {
        paragraphs.push(PREVIOUS_HEADING.to_string());
        for event in previous {
            paragraphs.extend(event_paragraphs(event));
        }
    }

    paragraphs.join("\n\n")
}
