use gloo::net::http::Request;
use shared::{decode_event_batch, ApiEnvelope, Event, EventValidationError, FetchError};
use web_sys::AbortSignal;

use crate::services::logging::Logger;
use crate::services::session::SessionContext;

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    /// Create a new API client for `base_url` acting on behalf of `session`
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch up to `limit` upcoming events.
    ///
    /// Network failures, non-2xx statuses, undecodable bodies and
    /// `success: false` envelopes all come back as [`FetchError`]. Single
    /// malformed events are dropped and logged instead of failing the batch.
    pub async fn get_upcoming_events(
        &self,
        limit: u32,
        abort_signal: Option<&AbortSignal>,
    ) -> Result<Vec<Event>, FetchError> {
        let url = format!("{}/api/events/upcoming", self.base_url);

        let mut request = Request::get(&url)
            .query([("limit", limit.to_string())])
            .abort_signal(abort_signal);
        if let Some(authorization) = self.session.authorization_header() {
            request = request.header("Authorization", &authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Err(FetchError::Status(status));
        }
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let (events, rejected) = read_upcoming_response(status, &body)?;
        for error in rejected {
            Logger::warn_with_component("api", &format!("Dropping malformed event: {}", error));
        }

        Ok(events)
    }
}

/// Turn a raw upcoming-events response into events plus per-record rejections
pub fn read_upcoming_response(
    status: u16,
    body: &str,
) -> Result<(Vec<Event>, Vec<EventValidationError>), FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let envelope: ApiEnvelope<Vec<serde_json::Value>> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(decode_event_batch(envelope.into_result()?.unwrap_or_default()))
}
