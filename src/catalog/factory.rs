use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::seed;
use crate::core::domain::Configuration;

// The catalog is shared, not cloned: every command built from the returned
// handle sees the same books.
pub fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    let catalog_svc: Arc<dyn CatalogService> = Arc::new(CatalogServiceImpl::new(config, book_repo));
    if config.load_sample_books {
        seed::load_sample_books(catalog_svc.as_ref());
    }
    catalog_svc
}
