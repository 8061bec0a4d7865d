use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ImportBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ImportBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportBooksCommandRequest {
    pub books: Vec<NewBookDto>,
}

impl ImportBooksCommandRequest {
    pub fn new(books: Vec<NewBookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl From<&[BookDto]> for ImportBooksCommandRequest {
    fn from(books: &[BookDto]) -> Self {
        Self::new(books.iter().map(NewBookDto::from).collect())
    }
}

#[derive(Debug, Serialize)]
pub struct ImportBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ImportBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ImportBooksCommandRequest, ImportBooksCommandResponse> for ImportBooksCommand {
    fn execute(&self, req: ImportBooksCommandRequest) -> Result<ImportBooksCommandResponse, CommandError> {
        match self.catalog_service.import_books(&req.books) {
            Ok(books) => {
                info!(count = books.len(), "books imported");
                Ok(ImportBooksCommandResponse::new(books))
            }
            Err(err) => {
                warn!(count = req.books.len(), error = %err, "import rejected");
                Err(CommandError::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::catalog::command::export_books_cmd::{ExportBooksCommand, ExportBooksCommandRequest};
    use crate::catalog::command::import_books_cmd::{ImportBooksCommand, ImportBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_import_books() {
        let source = factory::create_catalog_service(&Configuration::new("test").without_samples());
        source.add_book(&NewBookDto::new("Hyperion", "Dan Simmons", "978-0553283686", "Science Fiction", "").with_year(1989))
            .expect("should add book");
        let exported = ExportBooksCommand::new(source).execute(ExportBooksCommandRequest::default()).expect("should export");

        let target = factory::create_catalog_service(&Configuration::new("test").without_samples());
        let cmd = ImportBooksCommand::new(target.clone());
        let res = cmd.execute(ImportBooksCommandRequest::from(exported.books.as_slice())).expect("should import");
        assert_eq!(1, res.books.len());
        assert_eq!(1989, target.list_books().expect("should list")[0].year);

        let again = cmd.execute(ImportBooksCommandRequest::from(exported.books.as_slice()));
        assert!(matches!(again, Err(CommandError::DuplicateKey { .. })));
        assert_eq!(1, target.list_books().expect("should list").len());
    }
}
