//! Fetchers for the two public read-only pet APIs. Both are treated as
//! opaque upstream JSON sources; only the fields we read are modeled.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::ClientError;

const DOG_API_BASE: &str = "https://dog.ceo/api";
const CAT_API_BASE: &str = "https://catfact.ninja";

// ============================================================================
// Upstream response structs (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct DogImageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BreedListResponse {
    // BTreeMap keeps breed names sorted without a separate pass.
    message: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct CatFactResponse {
    fact: String,
}

// ============================================================================
// UpstreamClient
// ============================================================================

/// Client for the random-image and random-fact upstreams.
pub struct UpstreamClient {
    http: Client,
    dog_base: String,
    cat_base: String,
}

impl UpstreamClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_urls(DOG_API_BASE.to_string(), CAT_API_BASE.to_string())
    }

    /// Create a client with custom base URLs (for testing / integration)
    pub fn with_base_urls(dog_base: String, cat_base: String) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            dog_base: dog_base.trim_end_matches('/').to_string(),
            cat_base: cat_base.trim_end_matches('/').to_string(),
        })
    }

    /// A random dog image URL.
    pub async fn random_dog_image(&self) -> Result<String, ClientError> {
        let url = format!("{}/breeds/image/random", self.dog_base);
        let resp: DogImageResponse = self.fetch(&url).await?;
        Ok(resp.message)
    }

    /// A random cat fact.
    pub async fn cat_fact(&self) -> Result<String, ClientError> {
        let url = format!("{}/fact", self.cat_base);
        let resp: CatFactResponse = self.fetch(&url).await?;
        Ok(resp.fact)
    }

    /// A random image for one breed.
    pub async fn breed_image(&self, breed: &str) -> Result<String, ClientError> {
        let url = format!("{}/breed/{}/images/random", self.dog_base, breed);
        let resp: DogImageResponse = self.fetch(&url).await?;
        Ok(resp.message)
    }

    /// Fetch the breed list once and return the catalog. The catalog is the
    /// only cache in the client, and it lives exactly as long as this value.
    pub async fn breed_catalog(&self) -> Result<BreedCatalog, ClientError> {
        let url = format!("{}/breeds/list/all", self.dog_base);
        let resp: BreedListResponse = self.fetch(&url).await?;
        Ok(BreedCatalog {
            names: resp.message.into_keys().collect(),
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "upstream fetch");
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.json::<T>().await?)
    }
}

// ============================================================================
// BreedCatalog
// ============================================================================

/// In-memory breed name list, fetched once and filtered locally.
#[derive(Debug, Clone)]
pub struct BreedCatalog {
    names: Vec<String>,
}

impl BreedCatalog {
    /// All breed names, sorted.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Substring filter with a lowercased query. Breed names arrive
    /// lowercase from the upstream, so only the query needs folding.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let q = query.trim().to_lowercase();
        self.names
            .iter()
            .filter(|name| name.contains(&q))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> UpstreamClient {
        UpstreamClient::with_base_urls(server.uri(), server.uri()).unwrap()
    }

    #[tokio::test]
    async fn random_dog_image_reads_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/breeds/image/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "https://images.dog.ceo/breeds/akita/1.jpg",
                "status": "success"
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let url = client.random_dog_image().await.unwrap();
        assert_eq!(url, "https://images.dog.ceo/breeds/akita/1.jpg");
    }

    #[tokio::test]
    async fn cat_fact_reads_fact() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fact": "Cats sleep 70% of their lives.",
                "length": 30
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        assert_eq!(
            client.cat_fact().await.unwrap(),
            "Cats sleep 70% of their lives."
        );
    }

    #[tokio::test]
    async fn breed_image_uses_breed_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/breed/husky/images/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "https://images.dog.ceo/breeds/husky/2.jpg",
                "status": "success"
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let url = client.breed_image("husky").await.unwrap();
        assert_eq!(url, "https://images.dog.ceo/breeds/husky/2.jpg");
    }

    #[tokio::test]
    async fn breed_catalog_is_sorted_and_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/breeds/list/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": {
                    "terrier": ["border", "boston"],
                    "akita": [],
                    "husky": []
                },
                "status": "success"
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let catalog = client.breed_catalog().await.unwrap();
        assert_eq!(catalog.names(), ["akita", "husky", "terrier"]);
        assert_eq!(catalog.filter("TER"), vec!["terrier"]);
        assert_eq!(catalog.filter("  "), vec!["akita", "husky", "terrier"]);
        assert!(catalog.filter("poodle").is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fact"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        assert!(client.cat_fact().await.is_err());
    }
}
