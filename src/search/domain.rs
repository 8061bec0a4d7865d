use crate::books::domain::Book;
use crate::core::library::{BookField, LibraryResult};

/// Returns the books whose `field` contains `query`, ignoring case, in their
/// input order. An empty query matches every book.
pub fn search_books<B: Book + Clone>(books: &[B], field: BookField, query: &str) -> Vec<B> {
    let needle = query.to_lowercase();
    books.iter()
        .filter(|b| b.field(field).to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}

/// Same as [`search_books`] with the field given by name ("Title", "author",
/// "ISBN", ...). Any other name is an `InvalidField` error.
pub fn search_books_by<B: Book + Clone>(books: &[B], field_name: &str, query: &str) -> LibraryResult<Vec<B>> {
    let field = BookField::try_from(field_name)?;
    Ok(search_books(books, field, query))
}

pub fn result_summary(count: usize) -> String {
    format!("{} result{} found", count, if count != 1 { "s" } else { "" })
}
