use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::categories::domain::aggregate::{count_by_category, CategoryCount};
use crate::categories::domain::CategoryRegistry;
use crate::core::command::{Command, CommandError};

// CountCategoriesCommand recomputes the per-category counts from the current
// catalog and registry on every run.
pub struct CountCategoriesCommand {
    catalog_service: Arc<dyn CatalogService>,
    category_registry: Arc<dyn CategoryRegistry>,
}

impl CountCategoriesCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, category_registry: Arc<dyn CategoryRegistry>) -> Self {
        Self {
            catalog_service,
            category_registry,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CountCategoriesCommandRequest {}

#[derive(Debug, Serialize)]
pub struct CountCategoriesCommandResponse {
    pub categories: Vec<CategoryCount>,
}

impl Command<CountCategoriesCommandRequest, CountCategoriesCommandResponse> for CountCategoriesCommand {
    fn execute(&self, _req: CountCategoriesCommandRequest) -> Result<CountCategoriesCommandResponse, CommandError> {
        let books = self.catalog_service.list_books()?;
        let categories = self.category_registry.list_categories();
        Ok(CountCategoriesCommandResponse { categories: count_by_category(&books, &categories) })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{BookChanges, NewBookDto};
    use crate::catalog::factory::create_catalog_service;
    use crate::categories::command::count_categories_cmd::{CountCategoriesCommand, CountCategoriesCommandRequest};
    use crate::categories::domain::aggregate::CategoryCount;
    use crate::categories::factory::create_category_registry;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_count_categories() {
        let config = Configuration::new("test").without_samples();
        let catalog_svc = create_catalog_service(&config);
        let registry = create_category_registry(&config);
        let cmd = CountCategoriesCommand::new(catalog_svc.clone(), registry.clone());

        catalog_svc.add_book(&NewBookDto::new("Dune", "Frank Herbert", "1", "Science Fiction", "")).expect("should add book");
        let emma = catalog_svc.add_book(&NewBookDto::new("Emma", "Jane Austen", "2", "Romance", "")).expect("should add book");
        catalog_svc.add_book(&NewBookDto::new("Leaves of Grass", "Walt Whitman", "3", "Poetry", "")).expect("should add book");

        let res = cmd.execute(CountCategoriesCommandRequest::default()).expect("should count");
        assert_eq!(8, res.categories.len());
        assert_eq!(CategoryCount::new("Fiction", 0), res.categories[0]);
        assert_eq!(CategoryCount::new("Science Fiction", 1), res.categories[2]);
        assert_eq!(CategoryCount::new("Romance", 1), res.categories[4]);
        assert_eq!(2, res.categories.iter().map(|c| c.count).sum::<usize>());

        // counts follow later edits and registry changes
        catalog_svc.update_book(emma.book_id.as_str(), &BookChanges::default().category("Poetry")).expect("should update");
        registry.add_category("Poetry").expect("should add category");
        let res = cmd.execute(CountCategoriesCommandRequest::default()).expect("should count");
        assert_eq!(CategoryCount::new("Romance", 0), res.categories[4]);
        assert_eq!(Some(&CategoryCount::new("Poetry", 2)), res.categories.last());
    }

    #[test]
    fn test_should_count_sample_collection() {
        let config = Configuration::new("test");
        let catalog_svc = create_catalog_service(&config);
        let cmd = CountCategoriesCommand::new(catalog_svc, create_category_registry(&config));

        let res = cmd.execute(CountCategoriesCommandRequest::default()).expect("should count");
        let counts: Vec<(&str, usize)> = res.categories.iter().map(|c| (c.category.as_str(), c.count)).collect();
        assert_eq!(vec![("Fiction", 20), ("Non-Fiction", 0), ("Science Fiction", 20), ("Fantasy", 19),
                        ("Romance", 0), ("Mystery", 20), ("Biography", 10), ("History", 10)], counts);
    }
}
