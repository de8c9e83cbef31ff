use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::store::CatalogStore;
use crate::core::library::{LibraryError, LibraryResult, StorageStatus};

// CatalogServiceImpl serializes every call behind one lock. Store operations rewrite the
// mirror file, so they run on the blocking pool rather than on a runtime worker.
pub struct CatalogServiceImpl {
    store: Arc<Mutex<CatalogStore>>,
}

impl CatalogServiceImpl {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    async fn with_store<T, F>(&self, f: F) -> LibraryResult<T>
        where F: FnOnce(&mut CatalogStore) -> T + Send + 'static,
              T: Send + 'static {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = store.lock().map_err(|err| {
                LibraryError::runtime(format!("catalog lock poisoned {}", err).as_str(), None)
            })?;
            Ok(f(&mut guard))
        }).await.map_err(|err| {
            LibraryError::runtime(format!("catalog task failed {}", err).as_str(), None)
        })?
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<bool> {
        let book = book.clone();
        self.with_store(move |store| store.add(book)).await
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let isbn = isbn.to_string();
        self.with_store(move |store| store.search_by_isbn(isbn.as_str()).cloned()).await
    }

    async fn search_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        let title = title.to_string();
        self.with_store(move |store| {
            store.search_by_title(title.as_str()).into_iter().cloned().collect()
        }).await
    }

    async fn list_books(&self) -> LibraryResult<Vec<String>> {
        self.with_store(|store| store.list_all()).await
    }

    async fn issue_book(&self, isbn: &str) -> LibraryResult<bool> {
        let isbn = isbn.to_string();
        self.with_store(move |store| store.issue(isbn.as_str())).await
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<bool> {
        let isbn = isbn.to_string();
        self.with_store(move |store| store.return_book(isbn.as_str())).await
    }

    async fn storage_status(&self) -> LibraryResult<(StorageStatus, StorageStatus)> {
        self.with_store(|store| (store.last_load().clone(), store.last_save().clone())).await
    }
}
