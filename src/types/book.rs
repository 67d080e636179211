use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{config::Config, types::genre::Genre};

/// Request body for the catalog's create operation, derived from the form
/// state at submit time. Optional numeric and date fields are omitted from
/// the serialized body when empty; everything else passes through as typed.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreateRequest {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
    pub publisher: String,
    pub genre: Vec<Genre>,
}

/// A book record as the catalog returns it, id assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: uuid::Uuid,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub genre: Vec<Genre>,
}

impl Book {
    /// One-line styled summary for terminal output. Empty fields are left out.
    pub fn render(&self, config: &Config) -> String {
        let mut parts = vec![config.output_book.format_str(&self.title)];
        if config.output_book.display_uuid {
            let short: String = self.id.to_string().chars().take(8).collect();
            parts.push(config.output_uuid.format_str(short));
        }
        parts.push(config.output_author.format_str(&self.author));
        if !self.genre.is_empty() {
            parts.push(config.output_genre.format_vec(&self.genre));
        }
        if let Some(pages) = self.page_count {
            parts.push(config.output_page_count.format_str(pages));
        }
        if let Some(date) = self.published_date {
            parts.push(config.output_published.format_str(date.format("%Y-%m-%d")));
        }
        if !self.publisher.is_empty() {
            parts.push(config.output_publisher.format_str(&self.publisher));
        }
        if !self.isbn.is_empty() {
            parts.push(config.output_isbn.format_str(&self.isbn));
        }
        parts.join(" ")
    }
}
