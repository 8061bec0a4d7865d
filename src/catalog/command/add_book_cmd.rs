use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(flatten)]
    pub book: NewBookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: NewBookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let res = self.catalog_service.add_book(&req.book);
        match &res {
            Ok(book) => info!(book_id = book.book_id.as_str(), isbn = book.isbn.as_str(), "book added"),
            Err(err) => debug!(isbn = req.book.isbn.as_str(), error = %err, "book rejected"),
        }
        res.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
