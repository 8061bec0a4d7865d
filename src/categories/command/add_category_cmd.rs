use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::categories::domain::CategoryRegistry;
use crate::core::command::{Command, CommandError};

pub struct AddCategoryCommand {
    category_registry: Arc<dyn CategoryRegistry>,
}

impl AddCategoryCommand {
    pub fn new(category_registry: Arc<dyn CategoryRegistry>) -> Self {
        Self {
            category_registry,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryCommandRequest {
    pub name: String,
}

impl AddCategoryCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddCategoryCommandResponse {
    pub name: String,
}

impl Command<AddCategoryCommandRequest, AddCategoryCommandResponse> for AddCategoryCommand {
    fn execute(&self, req: AddCategoryCommandRequest) -> Result<AddCategoryCommandResponse, CommandError> {
        let name = self.category_registry.add_category(req.name.as_str())?;
        info!(category = name.as_str(), "category added");
        Ok(AddCategoryCommandResponse { name })
    }
}
