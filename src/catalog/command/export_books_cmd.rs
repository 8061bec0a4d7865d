use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// ExportBooksCommand returns the whole catalog in insertion order; listing
// the books for display goes through the same command.
pub struct ExportBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ExportBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ExportBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ExportBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ExportBooksCommandRequest, ExportBooksCommandResponse> for ExportBooksCommand {
    fn execute(&self, _req: ExportBooksCommandRequest) -> Result<ExportBooksCommandResponse, CommandError> {
        self.catalog_service.export_books().map_err(CommandError::from).map(ExportBooksCommandResponse::new)
    }
}
