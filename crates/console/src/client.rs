//! Gateway to the workouts API.
//!
//! [`WorkoutsGateway`] is the seam the page talks through; [`HttpGateway`]
//! implements it over HTTP using [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use workouts_core::ordering::SortOrderMove;
use workouts_core::types::DbId;

use crate::config::ConsoleConfig;
use crate::model::{NewWorkout, Workout, WorkoutPatch};

/// Errors from the gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Workouts API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered with a body the console cannot use.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Operations the admin page needs from the server.
#[async_trait]
pub trait WorkoutsGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Workout>, ClientError>;

    async fn create(&self, input: &NewWorkout) -> Result<Workout, ClientError>;

    async fn update(&self, id: DbId, patch: &WorkoutPatch) -> Result<Workout, ClientError>;

    async fn delete(&self, id: DbId) -> Result<(), ClientError>;

    /// Apply several `sortOrder` writes in one server-side transaction.
    async fn reorder(&self, moves: &[SortOrderMove]) -> Result<Vec<Workout>, ClientError>;
}

/// HTTP client for the workouts API.
pub struct HttpGateway {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Serialize)]
struct ReorderBody<'a> {
    moves: &'a [SortOrderMove],
}

impl HttpGateway {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a gateway reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ConsoleConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    fn workouts_url(&self) -> String {
        format!("{}/api/workouts", self.api_url)
    }

    fn workout_url(&self, id: DbId) -> String {
        format!("{}/api/workouts/{id}", self.api_url)
    }

    /// Deserialize a 2xx body, or turn anything else into [`ClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::error_for_status(response).await.map(|_| ())
    }

    async fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl WorkoutsGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<Workout>, ClientError> {
        let response = self.client.get(self.workouts_url()).send().await?;
        Self::parse_response(response).await
    }

    async fn create(&self, input: &NewWorkout) -> Result<Workout, ClientError> {
        let response = self
            .client
            .post(self.workouts_url())
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update(&self, id: DbId, patch: &WorkoutPatch) -> Result<Workout, ClientError> {
        let response = self
            .client
            .put(self.workout_url(id))
            .json(patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.workout_url(id)).send().await?;
        Self::check_status(response).await
    }

    async fn reorder(&self, moves: &[SortOrderMove]) -> Result<Vec<Workout>, ClientError> {
        let response = self
            .client
            .post(format!("{}/reorder", self.workouts_url()))
            .json(&ReorderBody { moves })
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
