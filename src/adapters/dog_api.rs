use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::model::CatalogEntry;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{FetchError, Result};

/// thedogapi 風格目錄：品種紀錄的陣列，帶選填的 temperament
#[derive(Debug, Clone)]
pub struct DogApiCatalog {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct BreedRecord {
    name: String,
    #[serde(default)]
    temperament: Option<String>,
}

impl DogApiCatalog {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for DogApiCatalog {
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

        let records: Vec<BreedRecord> = response.json().await?;
        Ok(records
            .into_iter()
            .map(|record| CatalogEntry {
                name: record.name,
                temperament: record.temperament,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_records_keep_optional_temperament() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/breeds");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "name": "Akita", "temperament": "Docile, Alert, Responsive"},
                    {"id": 2, "name": "Beagle"}
                ]));
        });

        let catalog = DogApiCatalog::new(Client::new(), server.url("/v1/breeds"));
        let entries = catalog.fetch_catalog().await.unwrap();

        api_mock.assert();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Akita");
        assert_eq!(
            entries[0].temperament.as_deref(),
            Some("Docile, Alert, Responsive")
        );
        assert_eq!(entries[1].name, "Beagle");
        assert_eq!(entries[1].temperament, None);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/breeds");
            then.status(503);
        });

        let catalog = DogApiCatalog::new(Client::new(), server.url("/v1/breeds"));
        let result = catalog.fetch_catalog().await;

        api_mock.assert();
        assert!(matches!(
            result,
            Err(FetchError::Status { status, .. }) if status.as_u16() == 503
        ));
    }
}
