use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is a catalog entry as held by the repository. Position in the
// repository is insertion order; book_id never changes once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, category: &str, description: &str,
               year: i32, available: bool) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            year,
            available,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
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
