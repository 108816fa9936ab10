//! CalDAV client helpers built on libdav.
//!
//! Provides the authenticated HTTP stack and a calendar-listing request; the
//! rest of the CalDAV traffic goes through libdav's built-in requests.

use anyhow::{Context, Result};
use http::uri::PathAndQuery;
use http::{Method, Request, Uri};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{client::legacy::Client, rt::TokioExecutor};
use libdav::CalDavClient;
use libdav::dav::WebDavClient;
use libdav::requests::{DavRequest, ParseResponseError};
use tower::ServiceBuilder;
use tower_http::{auth::AddAuthorization, follow_redirect::FollowRedirect};

/// HTTP client with basic auth and redirect following.
type HttpClient = FollowRedirect<
    AddAuthorization<
        Client<
            hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
            String,
        >,
    >,
>;

/// CalDAV client used for the single read this tool performs.
pub type PageCalDavClient = CalDavClient<HttpClient>;

/// Create a libdav CalDavClient for the configured server.
///
/// The client is configured with:
/// - Basic authentication using the provided credentials
/// - Automatic redirect following (servers commonly redirect to
///   user-specific hosts)
/// - HTTPS support
pub fn create_client(base_url: &str, username: &str, password: &str) -> Result<PageCalDavClient> {
    let uri: Uri = base_url
        .parse()
        .with_context(|| format!("Invalid CalDAV URL: {}", base_url))?;

    let https_connector = HttpsConnectorBuilder::new()
        .with_native_roots()
        .context("Failed to load native TLS roots")?
        .https_or_http()
        .enable_http1()
        .build();

    let http_client = Client::builder(TokioExecutor::new()).build(https_connector);

    let auth_client = AddAuthorization::basic(http_client, username, password);

    let client = ServiceBuilder::new()
        .layer(tower_http::follow_redirect::FollowRedirectLayer::new())
        .service(auth_client);

    let webdav = WebDavClient::new(uri, client);
    Ok(CalDavClient::new(webdav))
}

// ============================================================================
// Calendar listing via PROPFIND on the calendar home set
// ============================================================================

/// Request listing the calendar collections under a calendar home set.
pub struct ListCalendars<'a> {
    home_set_href: &'a str,
}

impl<'a> ListCalendars<'a> {
    pub fn new(home_set_href: &'a str) -> Self {
        Self { home_set_href }
    }
}

/// One calendar collection found under the home set.
#[derive(Debug)]
pub struct CalendarCollection {
    pub href: String,
    pub name: Option<String>,
}

/// Response from a [`ListCalendars`] request.
#[derive(Debug)]
pub struct ListCalendarsResponse {
    pub calendars: Vec<CalendarCollection>,
}

impl DavRequest for ListCalendars<'_> {
    type Response = ListCalendarsResponse;
    type ParseError = ParseResponseError;
    type Error<E> = libdav::dav::WebDavError<E>;

    fn prepare_request(&self, base_url: Uri) -> std::result::Result<Request<String>, http::Error> {
        let body = r#"<propfind xmlns="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
    <prop>
        <displayname/>
        <resourcetype/>
    </prop>
</propfind>"#
            .to_string();

        let mut parts = base_url.into_parts();
        parts.path_and_query = Some(PathAndQuery::try_from(self.home_set_href)?);

        Request::builder()
            .method(Method::from_bytes(b"PROPFIND")?)
            .uri(Uri::from_parts(parts)?)
            .header("Depth", "1")
            .body(body)
    }

    fn parse_response(
        &self,
        parts: &http::response::Parts,
        body: &[u8],
    ) -> std::result::Result<Self::Response, ParseResponseError> {
        if !parts.status.is_success() {
            return Err(ParseResponseError::BadStatusCode(parts.status));
        }

        let calendars = parse_calendar_collections(body)?;
        Ok(ListCalendarsResponse { calendars })
    }
}

/// Parse calendar collections from a PROPFIND multistatus response.
///
/// Only responses whose resourcetype carries a `calendar` child are kept;
/// the home set itself reports as a plain collection and is filtered out.
fn parse_calendar_collections(
    body: &[u8],
) -> std::result::Result<Vec<CalendarCollection>, ParseResponseError> {
    let text = std::str::from_utf8(body)?;
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();

    let mut calendars = Vec::new();

    for response in root
        .descendants()
        .filter(|n| n.tag_name().name() == "response")
    {
        let href = response
            .descendants()
            .find(|n| n.tag_name().name() == "href")
            .and_then(|n| n.text())
            .map(|s| s.to_string());
        let Some(href) = href else { continue };

        let is_calendar = response
            .descendants()
            .filter(|n| n.tag_name().name() == "resourcetype")
            .any(|rt| rt.children().any(|c| c.tag_name().name() == "calendar"));
        if !is_calendar {
            continue;
        }

        let name = response
            .descendants()
            .find(|n| n.tag_name().name() == "displayname")
            .and_then(|n| n.text())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        calendars.push(CalendarCollection { href, name });
    }

    Ok(calendars)
}
