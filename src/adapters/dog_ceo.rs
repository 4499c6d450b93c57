use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::model::CatalogEntry;
use crate::domain::ports::{CatalogSource, ImageSource};
use crate::utils::error::{FetchError, Result};

pub const BREED_PLACEHOLDER: &str = "{breed}";

/// dog.ceo 風格目錄：message 物件的 key 就是品種名稱
#[derive(Debug, Clone)]
pub struct DogCeoCatalog {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct BreedListResponse {
    message: IndexMap<String, Vec<String>>,
}

impl DogCeoCatalog {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for DogCeoCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        let body: BreedListResponse = response.json().await?;
        Ok(body.message.into_keys().map(CatalogEntry::new).collect())
    }
}

/// 每個品種一張圖片；端點樣板中的 {breed} 會被品種名稱替換
#[derive(Debug, Clone)]
pub struct DogCeoImages {
    client: Client,
    endpoint_template: String,
}

#[derive(Debug, Deserialize)]
struct BreedImageResponse {
    message: String,
}

impl DogCeoImages {
    pub fn new(client: Client, endpoint_template: impl Into<String>) -> Result<Self> {
        let endpoint_template = endpoint_template.into();
        if !endpoint_template.contains(BREED_PLACEHOLDER) {
            return Err(FetchError::InvalidConfigValue {
                field: "image_endpoint".to_string(),
                value: endpoint_template,
                reason: format!("Template must contain the {} placeholder", BREED_PLACEHOLDER),
            });
        }

        Ok(Self {
            client,
            endpoint_template,
        })
    }
}

#[async_trait]
impl ImageSource for DogCeoImages {
    async fn fetch_image(&self, breed: &str) -> Result<String> {
        let endpoint = self.endpoint_template.replace(BREED_PLACEHOLDER, breed);
        let response = self.client.get(&endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status });
        }

        let body: BreedImageResponse = response.json().await?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn image_template(server: &MockServer) -> String {
        format!("{}/breed/{{breed}}/images/random", server.base_url())
    }

    #[tokio::test]
    async fn test_catalog_names_come_from_message_keys_in_order() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/breeds/list/all");
            // raw body keeps the key order the API sent
            then.status(200)
                .header("Content-Type", "application/json")
                .body(
                    r#"{"message":{"whippet":[],"akita":[],"bulldog":["french","english"]},"status":"success"}"#,
                );
        });

        let catalog = DogCeoCatalog::new(Client::new(), server.url("/breeds/list/all"));
        let entries = catalog.fetch_catalog().await.unwrap();

        api_mock.assert();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["whippet", "akita", "bulldog"]);
        assert!(entries.iter().all(|e| e.temperament.is_none()));
    }

    #[tokio::test]
    async fn test_catalog_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/breeds/list/all");
            then.status(500);
        });

        let catalog = DogCeoCatalog::new(Client::new(), server.url("/breeds/list/all"));
        let result = catalog.fetch_catalog().await;

        api_mock.assert();
        assert!(matches!(
            result,
            Err(FetchError::Status { status, .. }) if status.as_u16() == 500
        ));
    }

    #[tokio::test]
    async fn test_image_url_comes_from_message_field() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/breed/beagle/images/random");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "message": "https://images.dog.ceo/breeds/beagle/n02088364_11136.jpg",
                    "status": "success"
                }));
        });

        let images = DogCeoImages::new(Client::new(), image_template(&server)).unwrap();
        let url = images.fetch_image("beagle").await.unwrap();

        api_mock.assert();
        assert_eq!(url, "https://images.dog.ceo/breeds/beagle/n02088364_11136.jpg");
    }

    #[tokio::test]
    async fn test_image_non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/breed/akita/images/random");
            then.status(404);
        });

        let images = DogCeoImages::new(Client::new(), image_template(&server)).unwrap();
        let result = images.fetch_image("akita").await;

        assert!(matches!(result, Err(FetchError::Status { .. })));
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let result = DogCeoImages::new(Client::new(), "https://dog.ceo/api/images/random");
        assert!(matches!(result, Err(FetchError::InvalidConfigValue { .. })));
    }
}
