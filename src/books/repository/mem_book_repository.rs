use chrono::Utc;
use parking_lot::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemBookRepository keeps books in insertion order behind a single lock, so the
// ISBN check and the write that follows it are one atomic step.
#[derive(Debug, Default)]
pub struct MemBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(books: &[BookEntity], id: &str) -> Option<usize> {
    books.iter().position(|b| b.book_id == id)
}

fn not_found(id: &str) -> LibraryError {
    LibraryError::not_found(format!("book not found for id {}", id).as_str())
}

impl Repository<BookEntity> for MemBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write();
        if books.iter().any(|b| b.isbn == entity.isbn) {
            return Err(LibraryError::duplicate_isbn(entity.isbn.as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    fn create_all(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.write();
        for (i, entity) in entities.iter().enumerate() {
            let taken = books.iter().chain(&entities[..i]).any(|b| b.isbn == entity.isbn);
            if taken {
                return Err(LibraryError::duplicate_isbn(entity.isbn.as_str()));
            }
        }
        books.extend_from_slice(entities);
        Ok(entities.len())
    }

    fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write();
        let ndx = position(&books, entity.book_id.as_str()).ok_or_else(|| not_found(entity.book_id.as_str()))?;
        if books[ndx].version != entity.version {
            return Err(LibraryError::conflict(
                format!("book {} was modified, expected version {} but found {}",
                        entity.book_id, entity.version, books[ndx].version).as_str()));
        }
        if books.iter().any(|b| b.isbn == entity.isbn && b.book_id != entity.book_id) {
            return Err(LibraryError::duplicate_isbn(entity.isbn.as_str()));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        books[ndx] = updated;
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read();
        position(&books, id).map(|ndx| books[ndx].clone()).ok_or_else(|| not_found(id))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write();
        let ndx = position(&books, id).ok_or_else(|| not_found(id))?;
        books.remove(ndx);
        Ok(1)
    }

    fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().clone())
    }
}

impl BookRepository for MemBookRepository {
    fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.read().iter().find(|b| b.isbn == isbn).cloned())
    }
}
