use std::sync::Arc;
use crate::categories::domain::CategoryRegistry;
use crate::categories::domain::registry::MemCategoryRegistry;
use crate::core::domain::Configuration;

pub fn create_category_registry(config: &Configuration) -> Arc<dyn CategoryRegistry> {
    Arc::new(MemCategoryRegistry::with_categories(&config.default_categories))
}
