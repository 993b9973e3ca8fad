//! Wrapper over the Favorites API: `list`, `save`, `remove`, plus the
//! mutate-then-reload helpers the UI uses. There is no incremental patching:
//! after any successful mutation the full list is re-fetched, which keeps the
//! displayed state eventually consistent with the store at the cost of one
//! extra round trip.

use std::time::Duration;

use pawmark_core::Favorite;
use reqwest::Client;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::error::ClientError;

/// Client for the favorites endpoint.
pub struct FavoritesClient {
    http: Client,
    base_url: String,
}

impl FavoritesClient {
    /// `base_url` is the server root, e.g. `https://app.example.com` — the
    /// `/api/favorites` path is appended per call.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/favorites", self.base_url)
    }

    /// Fetch the current favorites, newest first.
    pub async fn list(&self) -> Result<Vec<Favorite>, ClientError> {
        let resp = self.http.get(self.endpoint()).send().await?;
        let body = read_envelope(resp).await?;
        let favorites = body
            .get("favorites")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(serde_json::from_value(favorites)?)
    }

    /// Save a new favorite. Sends a JSON body with `type` and `value` and
    /// returns the created record including its store-assigned id.
    pub async fn save(&self, kind: &str, value: &str) -> Result<Favorite, ClientError> {
        let resp = self
            .http
            .post(self.endpoint())
            .json(&json!({ "type": kind, "value": value }))
            .send()
            .await?;
        let body = read_envelope(resp).await?;
        let saved = body
            .get("saved")
            .cloned()
            .ok_or_else(|| ClientError::Api("response missing saved record".to_string()))?;
        Ok(serde_json::from_value(saved)?)
    }

    /// Remove a favorite by id, sent as a URL-escaped query parameter.
    pub async fn remove(&self, id: Uuid) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.endpoint())
            .query(&[("id", id.to_string())])
            .send()
            .await?;
        read_envelope(resp).await?;
        Ok(())
    }

    /// Save, then re-fetch the full list for re-rendering.
    pub async fn save_and_reload(
        &self,
        kind: &str,
        value: &str,
    ) -> Result<Vec<Favorite>, ClientError> {
        self.save(kind, value).await?;
        self.list().await
    }

    /// Remove, then re-fetch the full list for re-rendering.
    pub async fn remove_and_reload(&self, id: Uuid) -> Result<Vec<Favorite>, ClientError> {
        self.remove(id).await?;
        self.list().await
    }
}

/// Parse a response into its JSON envelope. Unparseable bodies become `{}`
/// before status inspection; a non-success status yields the envelope's
/// `error` field when present, else `HTTP <status>`.
async fn read_envelope(resp: reqwest::Response) -> Result<Value, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    let body: Value =
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::Object(Map::new()));

    if !status.is_success() {
        let msg = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        tracing::warn!(status = %status, error = %msg, "favorites API request failed");
        return Err(ClientError::Api(msg));
    }

    Ok(body)
}
