use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::diagnostics::Diagnostics;
use crate::core::domain::Identifiable;
use crate::core::library::StorageStatus;

/// In-memory catalog of books mirrored to a single file.
///
/// Every successful mutation rewrites the whole mirror before returning. Load and
/// save failures never reach the caller: the store keeps working on its in-memory
/// state and records the outcome in [`CatalogStore::last_load`] and
/// [`CatalogStore::last_save`].
pub struct CatalogStore {
    books: Vec<BookEntity>,
    repository: Box<dyn BookRepository>,
    diagnostics: Arc<dyn Diagnostics>,
    last_load: StorageStatus,
    last_save: StorageStatus,
}

impl CatalogStore {
    /// Opens the catalog, creating an empty mirror if none exists. A corrupt or
    /// unreadable mirror yields an empty catalog.
    pub fn open(repository: Box<dyn BookRepository>, diagnostics: Arc<dyn Diagnostics>) -> Self {
        let mut store = Self {
            books: vec![],
            repository,
            diagnostics,
            last_load: StorageStatus::NotAttempted,
            last_save: StorageStatus::NotAttempted,
        };
        store.load();
        store
    }

    fn load(&mut self) {
        let location = self.repository.location().display().to_string();
        match self.repository.load() {
            Ok(Some(books)) => {
                self.diagnostics.info(format!("Loaded {} books from {}", books.len(), location).as_str());
                self.books = books;
                self.last_load = StorageStatus::Succeeded;
            }
            Ok(None) => {
                self.diagnostics.info(format!("Catalog file {} not found, creating an empty catalog", location).as_str());
                self.books = vec![];
                self.last_load = StorageStatus::Succeeded;
                self.save();
            }
            Err(err) => {
                self.diagnostics.error(format!("Failed to load catalog {}, starting with an empty catalog: {}", location, err).as_str());
                self.books = vec![];
                self.last_load = StorageStatus::failed(&err);
            }
        }
    }

    fn save(&mut self) {
        match self.repository.save(&self.books) {
            Ok(count) => {
                self.diagnostics.info(format!("Saved {} books to {}", count, self.repository.location().display()).as_str());
                self.last_save = StorageStatus::Succeeded;
            }
            Err(err) => {
                self.diagnostics.error(format!("Failed to save catalog {}: {}", self.repository.location().display(), err).as_str());
                self.last_save = StorageStatus::failed(&err);
            }
        }
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        let isbn = isbn.trim();
        self.books.iter().position(|b| b.isbn == isbn)
    }

    /// Adds the book unless its isbn is already catalogued.
    pub fn add(&mut self, mut book: BookEntity) -> bool {
        book.isbn = book.isbn.trim().to_string();
        if self.position(book.id().as_str()).is_some() {
            self.diagnostics.warn(format!("Attempt to add duplicate ISBN: {}", book.id()).as_str());
            return false;
        }
        let added = book.to_string();
        self.books.push(book);
        self.save();
        self.diagnostics.info(format!("Book added: {}", added).as_str());
        true
    }

    pub fn search_by_title(&self, title: &str) -> Vec<&BookEntity> {
        let title = title.trim().to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(title.as_str()))
            .collect()
    }

    pub fn search_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.position(isbn).map(|ndx| &self.books[ndx])
    }

    pub fn list_all(&self) -> Vec<String> {
        self.books.iter().map(BookEntity::to_string).collect()
    }

    pub fn issue(&mut self, isbn: &str) -> bool {
        let Some(ndx) = self.position(isbn) else {
            self.diagnostics.info(format!("Issue failed: ISBN not found {}", isbn.trim()).as_str());
            return false;
        };
        if !self.books[ndx].issue() {
            self.diagnostics.info(format!("Book already issued: {}", isbn.trim()).as_str());
            return false;
        }
        self.save();
        self.diagnostics.info(format!("Issued book: {}", isbn.trim()).as_str());
        true
    }

    pub fn return_book(&mut self, isbn: &str) -> bool {
        let Some(ndx) = self.position(isbn) else {
            self.diagnostics.info(format!("Return failed: ISBN not found {}", isbn.trim()).as_str());
            return false;
        };
        if !self.books[ndx].return_book() {
            self.diagnostics.info(format!("Book was not issued: {}", isbn.trim()).as_str());
            return false;
        }
        self.save();
        self.diagnostics.info(format!("Returned book: {}", isbn.trim()).as_str());
        true
    }

    pub fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn last_load(&self) -> &StorageStatus {
        &self.last_load
    }

    pub fn last_save(&self) -> &StorageStatus {
        &self.last_save
    }
}
