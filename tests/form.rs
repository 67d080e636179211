use std::sync::Mutex;

use chrono::NaiveDate;
use libris::{
    form::{AddBookForm, FormField, FormState, SubmitOutcome},
    traits::{CatalogApi, Notifier},
    types::{
        book::{Book, BookCreateRequest},
        genre::Genre,
    },
};
use pretty_assertions::assert_eq;

struct FakeCatalog {
    fail: bool,
    calls: Mutex<Vec<BookCreateRequest>>,
}

impl FakeCatalog {
    fn accepting() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(vec![]),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(vec![]),
        }
    }

    fn calls(&self) -> Vec<BookCreateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl CatalogApi for FakeCatalog {
    async fn create_book(&self, request: &BookCreateRequest) -> anyhow::Result<Book> {
        self.calls.lock().unwrap().push(request.clone());
        if self.fail {
            anyhow::bail!("catalog unavailable");
        }
        Ok(Book {
            id: uuid::Uuid::new_v4(),
            title: request.title.clone(),
            author: request.author.clone(),
            description: request.description.clone(),
            cover_image: request.cover_image.clone(),
            isbn: request.isbn.clone(),
            page_count: request.page_count,
            published_date: request.published_date,
            publisher: request.publisher.clone(),
            genre: request.genre.clone(),
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_owned());
    }

    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_owned());
    }
}

#[tokio::test]
async fn submit_without_title_never_reaches_the_catalog() {
    let catalog = FakeCatalog::accepting();
    let notifier = RecordingNotifier::default();
    let mut form = AddBookForm::new(&catalog, &notifier);
    form.update_field(FormField::Author, "Someone");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert!(catalog.calls().is_empty());
    assert_eq!(notifier.errors(), vec!["Title and author are required"]);
    assert_eq!(form.state().author, "Someone");
}

#[tokio::test]
async fn whitespace_only_required_fields_are_rejected() {
    let catalog = FakeCatalog::accepting();
    let notifier = RecordingNotifier::default();
    let mut form = AddBookForm::new(&catalog, &notifier);
    form.update_field(FormField::Title, "   ");
    form.update_field(FormField::Author, "\t ");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert!(catalog.calls().is_empty());
    assert!(notifier.successes().is_empty());
    assert_eq!(notifier.errors(), vec!["Title and author are required"]);
}

#[test]
fn page_count_input_keeps_digits_only() {
    let state = FormState::default().with_field(FormField::PageCount, "41a2");
    assert_eq!(state.page_count, "412");

    let state = state.with_field(FormField::PageCount, " 1,024 pages ");
    assert_eq!(state.page_count, "1024");

    let state = state.with_field(FormField::PageCount, "none");
    assert_eq!(state.page_count, "");
}

#[test]
fn toggling_a_genre_off_restores_the_previous_list() {
    let before = FormState::default().with_genre(Genre::Fantasy, true);
    let after = before
        .clone()
        .with_genre(Genre::Mystery, true)
        .with_genre(Genre::Mystery, false);
    assert_eq!(after, before);
}

#[test]
fn toggling_an_absent_genre_off_is_a_noop() {
    let before = FormState::default().with_genre(Genre::Poetry, true);
    let after = before.clone().with_genre(Genre::Drama, false);
    assert_eq!(after, before);
}

#[test]
fn genres_stay_unique_and_in_toggle_order() {
    let state = FormState::default()
        .with_genre(Genre::ScienceFiction, true)
        .with_genre(Genre::Fantasy, true)
        .with_genre(Genre::ScienceFiction, true);
    assert_eq!(state.genres, vec![Genre::ScienceFiction, Genre::Fantasy]);
}

#[test]
fn empty_and_unparseable_optionals_are_absent_from_the_request() {
    let request = FormState::default()
        .with_field(FormField::Title, "Dune")
        .with_field(FormField::Author, "Frank Herbert")
        .to_request();
    assert_eq!(request.page_count, None);
    assert_eq!(request.published_date, None);
    assert_eq!(request.description, "");
    assert!(request.genre.is_empty());

    let request = FormState::default()
        .with_field(FormField::PublishedDate, "sometime in the sixties")
        .to_request();
    assert_eq!(request.published_date, None);
}

#[tokio::test]
async fn successful_submit_resets_and_reports() {
    let catalog = FakeCatalog::accepting();
    let notifier = RecordingNotifier::default();
    let created: Mutex<Option<Book>> = Mutex::new(None);

    let mut form = AddBookForm::new(&catalog, &notifier).with_on_success(|book: &Book| {
        *created.lock().unwrap() = Some(book.clone());
    });
    form.update_field(FormField::Title, "Dune");
    form.update_field(FormField::Author, "Frank Herbert");
    form.update_field(FormField::PageCount, "41a2");
    form.update_field(FormField::PublishedDate, "1965-08-01");
    form.update_field(FormField::Publisher, "Chilton Books");
    form.toggle_genre(Genre::ScienceFiction, true);
    form.toggle_genre(Genre::Classics, true);

    let outcome = form.submit().await;

    let calls = catalog.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Dune");
    assert_eq!(calls[0].page_count, Some(412));
    assert_eq!(
        calls[0].published_date,
        Some(NaiveDate::from_ymd_opt(1965, 8, 1).unwrap())
    );
    assert_eq!(calls[0].genre, vec![Genre::ScienceFiction, Genre::Classics]);

    let SubmitOutcome::Created(book) = outcome else {
        panic!("expected a created book, got {outcome:?}");
    };
    assert_eq!(created.lock().unwrap().clone(), Some(book));
    assert_eq!(notifier.successes(), vec!["Book added successfully"]);
    assert!(notifier.errors().is_empty());
    assert_eq!(form.state(), &FormState::default());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn failed_submit_preserves_state_for_retry() {
    let catalog = FakeCatalog::failing();
    let notifier = RecordingNotifier::default();
    let mut form = AddBookForm::new(&catalog, &notifier);
    form.update_field(FormField::Title, "Dune");
    form.update_field(FormField::Author, "Frank Herbert");
    form.update_field(FormField::Isbn, "9780441172719");
    form.toggle_genre(Genre::ScienceFiction, true);
    let before = form.state().clone();

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert_eq!(catalog.calls().len(), 1);
    assert_eq!(form.state(), &before);
    assert_eq!(notifier.errors(), vec!["Failed to add book"]);
    assert!(notifier.successes().is_empty());
    assert!(!form.is_submitting());
}
