//! Transport seam between the booking form and the reservation API
//!
//! The form machine and the availability resolver only ever talk to
//! [`BookingTransport`]; the reqwest implementation is swapped for an
//! in-memory mock in tests.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{AvailabilityResponse, ReservationConfirmation, ReservationRequest};

use crate::{ClientConfig, ClientError, ClientResult};

/// Network seam for the booking endpoints
#[async_trait]
pub trait BookingTransport: Send + Sync {
    /// Unavailable slot values for one `YYYY-MM-DD` date
    async fn fetch_unavailable(&self, date: &str) -> ClientResult<AvailabilityResponse>;

    /// Submit a reservation request
    async fn submit_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ClientResult<ReservationConfirmation>;
}

/// HTTP transport for making network requests to the booking server
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new HTTP transport from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Failures arrive in the { code, message, details? } envelope;
            // fall back to the raw body when it is something else.
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|body| body["message"].as_str().map(str::to_string))
                .unwrap_or(text);

            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::CONFLICT => Err(ClientError::SlotTaken(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl BookingTransport for HttpTransport {
    async fn fetch_unavailable(&self, date: &str) -> ClientResult<AvailabilityResponse> {
        self.get(&format!("api/availability?date={}", date)).await
    }

    async fn submit_reservation(
        &self,
        request: &ReservationRequest,
    ) -> ClientResult<ReservationConfirmation> {
        self.post("api/reservations", request).await
    }
}
