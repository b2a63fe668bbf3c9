use super::models::EventRecord;
use crate::config::Config;
use crate::error::{backend_error, NoteCalResult};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

/// Event operations offered by a calendar backend
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    /// Fetch an event, `None` if the calendar does not hold it
    async fn get_event(&self, calendar_id: &str, event_id: &str)
        -> NoteCalResult<Option<EventRecord>>;

    /// Create an event and return it as stored
    async fn insert_event(&self, calendar_id: &str, event: &EventRecord)
        -> NoteCalResult<EventRecord>;

    /// Replace an event with `event`
    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &EventRecord,
    ) -> NoteCalResult<EventRecord>;

    /// Move an event to another calendar
    async fn move_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        destination_id: &str,
    ) -> NoteCalResult<EventRecord>;

    /// Delete an event, `false` if the backend reports it was not deleted
    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> NoteCalResult<bool>;
}

/// Google Calendar v3 REST client
#[derive(Clone)]
pub struct GoogleCalendarClient {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl GoogleCalendarClient {
    pub fn new(base_url: &str, access_token: impl Into<String>) -> NoteCalResult<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
            access_token: access_token.into(),
        })
    }

    pub fn from_config(config: &Config) -> NoteCalResult<Self> {
        Self::new(&config.google_api_url, config.google_access_token.clone())
    }

    /// URL of `calendars/{calendar_id}/events[/{segments}...]`
    fn events_url(&self, calendar_id: &str, segments: &[&str]) -> NoteCalResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| backend_error("Calendar API URL cannot be a base"))?
            .pop_if_empty()
            .extend(["calendars", calendar_id, "events"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.access_token))
    }

    async fn read_event(response: Response, action: &str) -> NoteCalResult<EventRecord> {
        let response = Self::check_status(response, action).await?;
        let event = response.json::<EventRecord>().await?;
        Ok(event)
    }

    async fn check_status(response: Response, action: &str) -> NoteCalResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        Err(backend_error(&format!(
            "Failed to {}: HTTP {} - {}",
            action, status, error_body
        )))
    }
}

fn is_gone(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::GONE
}

#[async_trait]
impl CalendarBackend for GoogleCalendarClient {
    async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> NoteCalResult<Option<EventRecord>> {
        debug!("Fetching event {} from calendar {}", event_id, calendar_id);
        let url = self.events_url(calendar_id, &[event_id])?;
        let response = self.request(Method::GET, url).send().await?;

        if is_gone(response.status()) {
            return Ok(None);
        }

        Self::read_event(response, "fetch event").await.map(Some)
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &EventRecord,
    ) -> NoteCalResult<EventRecord> {
        debug!("Inserting event into calendar {}", calendar_id);
        let url = self.events_url(calendar_id, &[])?;
        let response = self.request(Method::POST, url).json(event).send().await?;

        Self::read_event(response, "insert event").await
    }

    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &EventRecord,
    ) -> NoteCalResult<EventRecord> {
        debug!("Updating event {} in calendar {}", event_id, calendar_id);
        let url = self.events_url(calendar_id, &[event_id])?;
        let response = self.request(Method::PUT, url).json(event).send().await?;

        Self::read_event(response, "update event").await
    }

    async fn move_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        destination_id: &str,
    ) -> NoteCalResult<EventRecord> {
        debug!(
            "Moving event {} from calendar {} to {}",
            event_id, calendar_id, destination_id
        );
        let mut url = self.events_url(calendar_id, &[event_id, "move"])?;
        url.query_pairs_mut()
            .append_pair("destination", destination_id);
        let response = self.request(Method::POST, url).send().await?;

        Self::read_event(response, "move event").await
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> NoteCalResult<bool> {
        debug!("Deleting event {} from calendar {}", event_id, calendar_id);
        let url = self.events_url(calendar_id, &[event_id])?;
        let response = self.request(Method::DELETE, url).send().await?;

        if is_gone(response.status()) {
            info!(
                "Event {} was not present in calendar {}",
                event_id, calendar_id
            );
            return Ok(false);
        }

        Self::check_status(response, "delete event").await?;
        Ok(true)
    }
}
