pub mod mem_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;
}
