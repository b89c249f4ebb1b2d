//! Typed HTTP client for the room endpoints.

use reqwest::{Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Room as returned by `GET /room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub availability: String,
}

/// Outcome of `PATCH /room/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// 200 with the server's confirmation message
    Updated(String),
    /// 204, availability was already the requested value
    Unchanged,
}

#[derive(Serialize)]
struct RoomPayload<'a> {
    availability: &'a str,
}

#[derive(Deserialize)]
struct SuccessResponse {
    success: String,
}

#[derive(Deserialize)]
struct Problem {
    description: String,
}

pub struct RoomApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RoomApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("cannot be a base URL".to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: url,
        })
    }

    /// `POST /room`. Returns the confirmation message.
    pub async fn create_room(&self, availability: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.room_url(None))
            .json(&RoomPayload { availability })
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body: SuccessResponse = response.json().await?;
        Ok(body.success)
    }

    /// `GET /room`
    pub async fn get_room(&self) -> Result<Room, ClientError> {
        let response = self.http.get(self.room_url(None)).send().await?;

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `DELETE /room/{id}`
    pub async fn delete_room(&self, id: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.room_url(Some(id))).send().await?;

        ensure_success(response).await?;
        Ok(())
    }

    /// `PATCH /room/{id}`
    pub async fn update_room(
        &self,
        id: &str,
        availability: &str,
    ) -> Result<UpdateResult, ClientError> {
        let response = self
            .http
            .patch(self.room_url(Some(id)))
            .json(&RoomPayload { availability })
            .send()
            .await?;

        let response = ensure_success(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(UpdateResult::Unchanged);
        }
        let body: SuccessResponse = response.json().await?;
        Ok(UpdateResult::Updated(body.success))
    }

    fn room_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("room");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

/// Turn a non-2xx response into `ClientError::Api`, using the Problem body when present.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let description = match response.json::<Problem>().await {
        Ok(problem) => problem.description,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    tracing::debug!("Request failed with {}: {}", status, description);

    Err(ClientError::Api {
        status: status.as_u16(),
        description,
    })
}
