use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::categories::domain::CategoryRegistry;
use crate::core::command::{Command, CommandError};

pub struct RemoveCategoryCommand {
    category_registry: Arc<dyn CategoryRegistry>,
}

impl RemoveCategoryCommand {
    pub fn new(category_registry: Arc<dyn CategoryRegistry>) -> Self {
        Self {
            category_registry,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveCategoryCommandRequest {
    pub name: String,
}

impl RemoveCategoryCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveCategoryCommandResponse {}

impl Command<RemoveCategoryCommandRequest, RemoveCategoryCommandResponse> for RemoveCategoryCommand {
    fn execute(&self, req: RemoveCategoryCommandRequest) -> Result<RemoveCategoryCommandResponse, CommandError> {
        self.category_registry.remove_category(req.name.as_str())?;
        info!(category = req.name.as_str(), "category removed");
        Ok(RemoveCategoryCommandResponse {})
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::catalog::factory::create_catalog_service;
    use crate::categories::command::remove_category_cmd::{RemoveCategoryCommand, RemoveCategoryCommandRequest};
    use crate::categories::factory::create_category_registry;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_remove_category() {
        let registry = create_category_registry(&Configuration::new("test"));
        let cmd = RemoveCategoryCommand::new(registry.clone());
        cmd.execute(RemoveCategoryCommandRequest::new("Romance")).expect("should remove category");
        assert_eq!(7, registry.list_categories().len());
        assert!(!registry.list_categories().contains(&"Romance".to_string()));

        let res = cmd.execute(RemoveCategoryCommandRequest::new("Romance"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[test]
    fn test_should_leave_books_untouched() {
        let config = Configuration::new("test").without_samples();
        let catalog_svc = create_catalog_service(&config);
        let registry = create_category_registry(&config);
        catalog_svc.add_book(&NewBookDto::new("Emma", "Jane Austen", "978-0141439587", "Romance", "")).expect("should add book");

        RemoveCategoryCommand::new(registry).execute(RemoveCategoryCommandRequest::new("Romance"))
            .expect("should remove category");
        let books = catalog_svc.list_books().expect("should list");
        assert_eq!("Romance", books[0].category.as_str());
    }
}
