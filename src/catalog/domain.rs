pub mod service;

use crate::books::dto::{BookChanges, BookDto, NewBookDto};
use crate::core::library::LibraryResult;

// CatalogService is the authoritative, ordered store of books. Ids returned by
// add_book stay valid until that book is removed.
pub trait CatalogService: Sync + Send {
    fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto>;
    fn remove_book(&self, id: &str) -> LibraryResult<()>;
    fn update_book(&self, id: &str, changes: &BookChanges) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn export_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn import_books(&self, books: &[NewBookDto]) -> LibraryResult<Vec<BookDto>>;
}
