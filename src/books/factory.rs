use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::domain::Configuration;

pub fn create_book_repository(_config: &Configuration) -> Box<dyn BookRepository> {
    Box::new(MemBookRepository::new())
}
