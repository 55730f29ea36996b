//! HTTP client for the PlantPal REST API.
//!
//! Every endpoint wraps its payload in a `{ success, data, message }`
//! envelope; the client unwraps it and enforces a per-request timeout.
//! One attempt per call, no retry.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use super::error::ApiError;
use crate::models::{
    CareNote, GrowthLog, NewCareNote, NewGrowthLog, NewPlant, NewPlantImage, Plant, PlantImage,
    PlantUpdate,
};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the PlantPal REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // Plant operations

    pub async fn get_plants(&self) -> Result<Vec<Plant>, ApiError> {
        self.fetch(self.client.get(self.url("/plants"))).await
    }

    pub async fn create_plant(&self, plant: &NewPlant) -> Result<Plant, ApiError> {
        self.fetch(self.client.post(self.url("/plants")).json(plant))
            .await
    }

    pub async fn update_plant(&self, id: Uuid, updates: &PlantUpdate) -> Result<Plant, ApiError> {
        self.fetch(
            self.client
                .put(self.url(&format!("/plants/{}", id)))
                .json(updates),
        )
        .await
    }

    pub async fn delete_plant(&self, id: Uuid) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(self.client.delete(self.url(&format!("/plants/{}", id))))
            .await
            .map(|_| ())
    }

    // Growth log operations

    pub async fn get_growth_logs(&self) -> Result<Vec<GrowthLog>, ApiError> {
        self.fetch(self.client.get(self.url("/growth-logs"))).await
    }

    pub async fn create_growth_log(&self, log: &NewGrowthLog) -> Result<GrowthLog, ApiError> {
        self.fetch(self.client.post(self.url("/growth-logs")).json(log))
            .await
    }

    // Care note operations

    pub async fn get_care_notes(&self) -> Result<Vec<CareNote>, ApiError> {
        self.fetch(self.client.get(self.url("/care-notes"))).await
    }

    pub async fn create_care_note(&self, note: &NewCareNote) -> Result<CareNote, ApiError> {
        self.fetch(self.client.post(self.url("/care-notes")).json(note))
            .await
    }

    // Plant image operations

    pub async fn get_plant_images(&self, plant_id: Uuid) -> Result<Vec<PlantImage>, ApiError> {
        self.fetch(
            self.client
                .get(self.url(&format!("/plants/{}/images", plant_id))),
        )
        .await
    }

    pub async fn add_plant_image(
        &self,
        plant_id: Uuid,
        image: &NewPlantImage,
    ) -> Result<PlantImage, ApiError> {
        self.fetch(
            self.client
                .post(self.url(&format!("/plants/{}/images", plant_id)))
                .json(image),
        )
        .await
    }

    pub async fn delete_plant_image(&self, plant_id: Uuid, image_id: &str) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(
            self.client
                .delete(self.url(&format!("/plants/{}/images/{}", plant_id, image_id))),
        )
        .await
        .map(|_| ())
    }

    /// Probes the server's health endpoint.
    pub async fn health(&self) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(self.client.get(self.url("/health")))
            .await
            .map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Sends a request and unwraps the envelope's data payload.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let envelope = self.send(request).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Envelope("response envelope carried no data".to_string()))
    }

    /// Sends a request and decodes the envelope, mapping timeouts,
    /// transport failures, and non-2xx statuses to their error variants.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = request.timeout(self.timeout).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Failure responses usually still carry an envelope with a
            // human-readable message; fall back to the bare status.
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(ApiError::Status { status, message });
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Envelope(
                envelope
                    .message
                    .unwrap_or_else(|| "server reported failure".to_string()),
            ));
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://localhost:3001/api");
        assert_eq!(client.url("/plants"), "http://localhost:3001/api/plants");

        let client = ApiClient::new("http://localhost:3001/api/");
        assert_eq!(client.url("/plants"), "http://localhost:3001/api/plants");
    }

    #[test]
    fn test_default_timeout() {
        let client = ApiClient::new("http://localhost:3001/api");
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_envelope_decoding() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true, "data": ["a", "b"]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().len(), 2);
        assert!(envelope.message.is_none());

        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success": false, "message": "Plant not found"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Plant not found"));
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    #[tokio::test]
    async fn test_health_ok() {
        let app = Router::new().route(
            "/api/health",
            get(|| async { Json(json!({"success": true, "message": "PlantPal API is running!"})) }),
        );
        let client = ApiClient::new(serve(app).await);

        client.health().await.unwrap();
    }

    #[tokio::test]
    async fn test_status_error_carries_server_message() {
        let app = Router::new().route(
            "/api/plants",
            get(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"success": false, "message": "database unavailable"})),
                )
            }),
        );
        let client = ApiClient::new(serve(app).await);

        match client.get_plants().await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("expected status error, got {:?}", other.map(|p| p.len())),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 1 is never listening
        let client = ApiClient::new("http://127.0.0.1:1/api");
        match client.get_plants().await {
            Err(ApiError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other.map(|p| p.len())),
        }
    }

    #[tokio::test]
    async fn test_slow_server_is_timeout() {
        let app = Router::new().route(
            "/api/plants",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(json!({"success": true, "data": []}))
            }),
        );
        let base_url = serve(app).await;
        let client = ApiClient::with_timeout(base_url, Duration::from_millis(50));

        match client.get_plants().await {
            Err(ApiError::Timeout) => {}
            other => panic!("expected timeout, got {:?}", other.map(|p| p.len())),
        }
    }

    #[tokio::test]
    async fn test_success_false_on_ok_status_is_envelope_error() {
        let app = Router::new().route(
            "/api/plants",
            get(|| async { Json(json!({"success": false, "message": "nope"})) }),
        );
        let client = ApiClient::new(serve(app).await);

        match client.get_plants().await {
            Err(ApiError::Envelope(message)) => assert_eq!(message, "nope"),
            other => panic!("expected envelope error, got {:?}", other.map(|p| p.len())),
        }
    }
}
