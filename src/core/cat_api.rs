use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::CONTENT_TYPE,
};

use crate::core::{
    config::Config,
    errors::CatFinderError,
    fetch::CatSource,
    models::CatRecord,
};

pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1";

const API_KEY_HEADER: &str = "x-api-key";

/// TheCatAPI client. Cheap to clone; clones share the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct CatApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CatApi {
    pub fn new(config: &Config) -> Result<Self, CatFinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatFinderError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/images/search?has_breeds=1&limit=1", self.base_url)
    }
}

impl CatSource for CatApi {
    fn next_cat(&mut self) -> Result<Option<CatRecord>, CatFinderError> {
        let response = self
            .client
            .get(self.search_url())
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(CatFinderError::HttpStatus {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        let body = response.text()?;
        let mut records: Vec<CatRecord> = serde_json::from_str(&body)?;

        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records.remove(0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_requires_breed_data_and_one_result() {
        let api = CatApi::new(&Config { api_key: "k".to_string() })
            .unwrap()
            .with_base_url("http://localhost:9999/v1");

        assert_eq!(api.search_url(), "http://localhost:9999/v1/images/search?has_breeds=1&limit=1");
    }
}
