use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookField, LibraryError, LibraryResult};
use crate::utils::date::{current_year, serializer};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub description: String,
    pub year: i32,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}

fn require(field: BookField, value: &str) -> LibraryResult<()> {
    if value.trim().is_empty() {
        Err(LibraryError::validation(field))
    } else {
        Ok(())
    }
}

/// NewBookDto is a candidate for the catalog. `year` and `available` are
/// filled in when the book is added; text fields are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub year: Option<i32>,
    pub available: Option<bool>,
}

impl NewBookDto {
    pub fn new(title: &str, author: &str, isbn: &str, category: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            year: None,
            available: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Checks the required fields in order title, author, isbn, category and
    /// reports the first blank one.
    pub fn validate(&self) -> LibraryResult<()> {
        require(BookField::Title, self.title.as_str())?;
        require(BookField::Author, self.author.as_str())?;
        require(BookField::Isbn, self.isbn.as_str())?;
        require(BookField::Category, self.category.as_str())
    }

    // Text fields are stored trimmed so isbn uniqueness ignores padding.
    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.trim(), self.author.trim(), self.isbn.trim(),
                        self.category.trim(), self.description.trim(),
                        self.year.unwrap_or_else(current_year), self.available.unwrap_or(true))
    }
}

impl From<&BookDto> for NewBookDto {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            category: other.category.to_string(),
            description: other.description.to_string(),
            year: Some(other.year),
            available: Some(other.available),
        }
    }
}

// BookChanges carries the edited fields of a book; None leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub available: Option<bool>,
}

impl BookChanges {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = Some(isbn.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &BookChanges::default()
    }

    pub fn validate(&self) -> LibraryResult<()> {
        let required = [
            (BookField::Title, &self.title),
            (BookField::Author, &self.author),
            (BookField::Isbn, &self.isbn),
            (BookField::Category, &self.category),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                require(field, value.as_str())?;
            }
        }
        Ok(())
    }

    pub fn apply(&self, book: &mut BookEntity) {
        if let Some(title) = &self.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = &self.author {
            book.author = author.trim().to_string();
        }
        if let Some(isbn) = &self.isbn {
            book.isbn = isbn.trim().to_string();
        }
        if let Some(category) = &self.category {
            book.category = category.trim().to_string();
        }
        if let Some(description) = &self.description {
            book.description = description.trim().to_string();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(available) = self.available {
            book.available = available;
        }
    }
}
