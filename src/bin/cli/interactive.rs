use anyhow::Result;
use inquire::validator::StringValidator;

use libris::{
    form::{AddBookForm, FormField},
    traits::{CatalogApi, Notifier},
    types::genre::Genre,
};

#[derive(Clone)]
struct ValidatorNonEmpty {}
impl StringValidator for ValidatorNonEmpty {
    fn validate(
        &self,
        input: &str,
    ) -> Result<inquire::validator::Validation, inquire::CustomUserError> {
        if input.trim().is_empty() {
            return Ok(inquire::validator::Validation::Invalid(
                "Empty string not allowed".into(),
            ));
        }
        Ok(inquire::validator::Validation::Valid)
    }
}

/// Walks the user through every field of the add-book form. Title and author
/// must be non-empty; everything else can be skipped with Esc. Values go
/// through the form's own update path, so page-count input may contain
/// non-digits and still ends up numeric.
pub fn fill_book_form<C, N>(form: &mut AddBookForm<'_, C, N>) -> Result<()>
where
    C: CatalogApi,
    N: Notifier,
{
    let title = inquire::Text::new("What is the title of the book?")
        .with_validator(ValidatorNonEmpty {})
        .prompt()?;
    form.update_field(FormField::Title, &title);

    let author = inquire::Text::new("Who wrote it?")
        .with_validator(ValidatorNonEmpty {})
        .prompt()?;
    form.update_field(FormField::Author, &author);

    if let Some(description) = inquire::Editor::new("How would you describe it?").prompt_skippable()?
    {
        form.update_field(FormField::Description, &description);
    }
    if let Some(cover_image) =
        inquire::Text::new("Where can a cover image be found?").prompt_skippable()?
    {
        form.update_field(FormField::CoverImage, &cover_image);
    }
    if let Some(isbn) = inquire::Text::new("What is the isbn?").prompt_skippable()? {
        form.update_field(FormField::Isbn, &isbn);
    }
    if let Some(page_count) = inquire::Text::new("How many pages does it have?").prompt_skippable()?
    {
        form.update_field(FormField::PageCount, &page_count);
    }
    if let Some(published) =
        inquire::DateSelect::new("When was it published?").prompt_skippable()?
    {
        form.update_field(
            FormField::PublishedDate,
            &published.format("%Y-%m-%d").to_string(),
        );
    }
    if let Some(publisher) = inquire::Text::new("Who published it?").prompt_skippable()? {
        form.update_field(FormField::Publisher, &publisher);
    }

    let genres = inquire::MultiSelect::new("Which genres does it belong to?", Genre::ALL.to_vec())
        .prompt_skippable()?
        .unwrap_or_default();
    for genre in genres {
        form.toggle_genre(genre, true);
    }

    Ok(())
}
