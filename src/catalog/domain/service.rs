use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookChanges, BookDto, NewBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let entity = book.build_book();
        self.book_repository.create(&entity)?;
        Ok(BookDto::from(&entity))
    }

    fn remove_book(&self, id: &str) -> LibraryResult<()> {
        self.book_repository.delete(id).map(|_| ())
    }

    fn update_book(&self, id: &str, changes: &BookChanges) -> LibraryResult<BookDto> {
        changes.validate()?;
        let mut entity = self.book_repository.get(id)?;
        changes.apply(&mut entity);
        self.book_repository.update(&entity)?;
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>> {
        match self.book_repository.get(id) {
            Ok(book) => Ok(Some(BookDto::from(&book))),
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        self.book_repository.find_by_isbn(isbn.trim()).map(|b| b.as_ref().map(BookDto::from))
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list()?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn export_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.list_books()
    }

    fn import_books(&self, books: &[NewBookDto]) -> LibraryResult<Vec<BookDto>> {
        for book in books {
            book.validate()?;
        }
        let entities: Vec<BookEntity> = books.iter().map(NewBookDto::build_book).collect();
        self.book_repository.create_all(&entities)?;
        Ok(entities.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            description: other.description.to_string(),
            year: other.year,
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
