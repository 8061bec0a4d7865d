use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::{BookChanges, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    #[serde(flatten)]
    pub changes: BookChanges,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, changes: BookChanges) -> Self {
        Self {
            book_id: book_id.to_string(),
            changes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = self.catalog_service.update_book(req.book_id.as_str(), &req.changes)?;
        info!(book_id = book.book_id.as_str(), version = book.version, "book updated");
        Ok(UpdateBookCommandResponse::new(book))
    }
}
