use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::search::domain::{result_summary, search_books_by};

// SearchBooksCommand filters a fresh snapshot of the catalog on every run.
pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub field: String,
    #[serde(default)]
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(field: &str, query: &str) -> Self {
        Self {
            field: field.to_string(),
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub summary: String,
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            summary: result_summary(books.len()),
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.list_books()?;
        let found = search_books_by(&books, req.field.as_str(), req.query.as_str())?;
        debug!(field = req.field.as_str(), query = req.query.as_str(), found = found.len(), "search");
        Ok(SearchBooksCommandResponse::new(found))
    }
}
