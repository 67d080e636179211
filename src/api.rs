use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::Config,
    traits::CatalogApi,
    types::book::{Book, BookCreateRequest},
};

/// Catalog client speaking to the book service over HTTP.
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn create_book(&self, request: &BookCreateRequest) -> Result<Book> {
        let url = format!("{}/api/books", self.base_url);
        debug!("posting new book to {}", url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let book: Book = serde_path_to_error::deserialize(deserializer)
            .context("malformed create response from the catalog")?;
        Ok(book)
    }
}
