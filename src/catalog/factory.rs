use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::store::CatalogStore;
use crate::core::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service_with(config, Arc::new(TracingDiagnostics))
}

pub fn create_catalog_service_with(config: &Configuration, diagnostics: Arc<dyn Diagnostics>) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config);
    Box::new(CatalogServiceImpl::new(CatalogStore::open(book_repo, diagnostics)))
}
