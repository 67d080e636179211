use chrono::NaiveDate;
use tracing::error;

use crate::{
    traits::{CatalogApi, Notifier},
    types::{
        book::{Book, BookCreateRequest},
        genre::Genre,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Description,
    CoverImage,
    Isbn,
    PageCount,
    PublishedDate,
    Publisher,
}

/// Snapshot of everything the add-book form currently holds. Updates build a
/// new snapshot instead of mutating in place; the form swaps snapshots on
/// every event.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: String,
    pub isbn: String,
    pub page_count: String,
    pub published_date: String,
    pub publisher: String,
    pub genres: Vec<Genre>,
}

impl FormState {
    /// The page-count field only ever stores digits; other fields store the
    /// raw value.
    pub fn with_field(mut self, field: FormField, value: &str) -> Self {
        match field {
            FormField::Title => self.title = value.to_owned(),
            FormField::Author => self.author = value.to_owned(),
            FormField::Description => self.description = value.to_owned(),
            FormField::CoverImage => self.cover_image = value.to_owned(),
            FormField::Isbn => self.isbn = value.to_owned(),
            FormField::PageCount => {
                self.page_count = value.chars().filter(char::is_ascii_digit).collect()
            }
            FormField::PublishedDate => self.published_date = value.to_owned(),
            FormField::Publisher => self.publisher = value.to_owned(),
        }
        self
    }

    /// Genre selections stay duplicate-free and keep toggle order.
    pub fn with_genre(mut self, genre: Genre, included: bool) -> Self {
        if included {
            if !self.genres.contains(&genre) {
                self.genres.push(genre);
            }
        } else {
            self.genres.retain(|g| *g != genre);
        }
        self
    }

    pub fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }

    /// Page count and published date that are empty or unparseable are
    /// omitted rather than failing the submission.
    pub fn to_request(&self) -> BookCreateRequest {
        BookCreateRequest {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            cover_image: self.cover_image.clone(),
            isbn: self.isbn.clone(),
            page_count: self.page_count.parse().ok(),
            published_date: NaiveDate::parse_from_str(&self.published_date, "%Y-%m-%d").ok(),
            publisher: self.publisher.clone(),
            genre: self.genres.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Required fields were missing, or a submission was already in flight;
    /// the catalog was never called.
    Rejected,
    Created(Book),
    Failed,
}

/// The add-book form: field state plus the injected catalog and notifier
/// collaborators. An optional completion callback receives each successfully
/// created record.
pub struct AddBookForm<'a, C, N>
where
    C: CatalogApi,
    N: Notifier,
{
    api: &'a C,
    notifier: &'a N,
    state: FormState,
    submitting: bool,
    on_success: Option<Box<dyn FnMut(&Book) + 'a>>,
}

impl<'a, C, N> AddBookForm<'a, C, N>
where
    C: CatalogApi,
    N: Notifier,
{
    pub fn new(api: &'a C, notifier: &'a N) -> Self {
        Self {
            api,
            notifier,
            state: FormState::default(),
            submitting: false,
            on_success: None,
        }
    }

    pub fn with_on_success(mut self, callback: impl FnMut(&Book) + 'a) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// True while a create call is outstanding; front ends disable and
    /// relabel their submit control off this.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: FormField, value: &str) {
        self.state = self.state.clone().with_field(field, value);
    }

    pub fn toggle_genre(&mut self, genre: Genre, included: bool) {
        self.state = self.state.clone().with_genre(genre, included);
    }

    /// Validate, call the catalog once, and report the outcome. Any error
    /// from the create operation is logged and surfaced as a generic
    /// notification; the state is kept so the user can correct and retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Rejected;
        }
        if !self.state.has_required_fields() {
            self.notifier.notify_error("Title and author are required");
            return SubmitOutcome::Rejected;
        }

        self.submitting = true;
        let request = self.state.to_request();
        let result = self.api.create_book(&request).await;
        self.submitting = false;

        match result {
            Ok(book) => {
                self.notifier.notify_success("Book added successfully");
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&book);
                }
                self.state = FormState::default();
                SubmitOutcome::Created(book)
            }
            Err(e) => {
                error!("adding book failed: {:#}", e);
                self.notifier.notify_error("Failed to add book");
                SubmitOutcome::Failed
            }
        }
    }
}
