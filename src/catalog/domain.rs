pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, StorageStatus};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<bool>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;
    async fn search_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;
    async fn list_books(&self) -> LibraryResult<Vec<String>>;
    async fn issue_book(&self, isbn: &str) -> LibraryResult<bool>;
    async fn return_book(&self, isbn: &str) -> LibraryResult<bool>;
    async fn storage_status(&self) -> LibraryResult<(StorageStatus, StorageStatus)>;
}
