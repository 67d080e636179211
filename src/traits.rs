use anyhow::Result;

use crate::types::book::{Book, BookCreateRequest};

/// The remote catalog's create operation.
pub trait CatalogApi {
    async fn create_book(&self, request: &BookCreateRequest) -> Result<Book>;
}

/// Transient user-facing messages. Fire-and-forget, must not fail.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}
