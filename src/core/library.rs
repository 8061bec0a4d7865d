use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    Validation {
        field: BookField,
        message: String,
    },
    DuplicateIsbn {
        isbn: String,
    },
    NotFound {
        message: String,
    },
    InvalidField {
        field: String,
    },
    EmptyName {
        message: String,
    },
    DuplicateCategory {
        name: String,
    },
    // The entity was changed by someone else after it was read; the caller
    // should reload it and apply the change again.
    Conflict {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(field: BookField) -> LibraryError {
        LibraryError::Validation { field, message: format!("please enter {} {}", field.article(), field) }
    }

    pub fn duplicate_isbn(isbn: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { isbn: isbn.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_field(field: &str) -> LibraryError {
        LibraryError::InvalidField { field: field.to_string() }
    }

    pub fn empty_name(message: &str) -> LibraryError {
        LibraryError::EmptyName { message: message.to_string() }
    }

    pub fn duplicate_category(name: &str) -> LibraryError {
        LibraryError::DuplicateCategory { name: name.to_string() }
    }

    pub fn conflict(message: &str) -> LibraryError {
        LibraryError::Conflict { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateIsbn { isbn } => {
                write!(f, "a book with isbn {} already exists", isbn)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidField { field } => {
                write!(f, "unknown search field {:?}", field)
            }
            LibraryError::EmptyName { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateCategory { name } => {
                write!(f, "category {} already exists", name)
            }
            LibraryError::Conflict { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookField names the text fields of a book that are validated on add and
// that search can filter on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum BookField {
    Title,
    Author,
    Isbn,
    Category,
}

impl BookField {
    fn article(&self) -> &'static str {
        match self {
            BookField::Author | BookField::Isbn => "an",
            BookField::Title | BookField::Category => "a",
        }
    }
}

impl TryFrom<&str> for BookField {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(BookField::Title),
            "author" => Ok(BookField::Author),
            "isbn" => Ok(BookField::Isbn),
            "category" => Ok(BookField::Category),
            _ => Err(LibraryError::invalid_field(s)),
        }
    }
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookField::Title => write!(f, "title"),
            BookField::Author => write!(f, "author"),
            BookField::Isbn => write!(f, "ISBN"),
            BookField::Category => write!(f, "category"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookField, LibraryError};

    #[test]
    fn test_should_create_validation_error() {
        let err = LibraryError::validation(BookField::Isbn);
        assert!(matches!(err, LibraryError::Validation{ field: BookField::Isbn, message: _ }));
        assert_eq!("please enter an ISBN", err.to_string());
    }

    #[test]
    fn test_should_create_duplicate_isbn_error() {
        assert!(matches!(LibraryError::duplicate_isbn("978"), LibraryError::DuplicateIsbn{ isbn: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_invalid_field_error() {
        assert!(matches!(LibraryError::invalid_field("year"), LibraryError::InvalidField{ field: _ }));
    }

    #[test]
    fn test_should_create_category_errors() {
        assert!(matches!(LibraryError::empty_name("test"), LibraryError::EmptyName{ message: _ }));
        assert!(matches!(LibraryError::duplicate_category("Fiction"), LibraryError::DuplicateCategory{ name: _ }));
    }

    #[test]
    fn test_should_create_conflict_error() {
        assert!(matches!(LibraryError::conflict("test"), LibraryError::Conflict{ message: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        let err = serde_json::from_str::<i32>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_parse_book_field() {
        assert_eq!(BookField::Title, BookField::try_from("Title").expect("title"));
        assert_eq!(BookField::Author, BookField::try_from("author").expect("author"));
        assert_eq!(BookField::Isbn, BookField::try_from("ISBN").expect("isbn"));
        assert_eq!(BookField::Category, BookField::try_from(" Category ").expect("category"));
        assert_eq!(Err(LibraryError::invalid_field("year")), BookField::try_from("year"));
        assert_eq!(Err(LibraryError::invalid_field("")), BookField::try_from(""));
    }
}
