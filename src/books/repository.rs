pub mod json_book_repository;

use std::path::Path;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// BookRepository abstracts the mirror of the catalog; every save replaces the whole collection.
pub trait BookRepository: Sync + Send {
    // location of the mirror
    fn location(&self) -> &Path;

    // loads all books, None when the mirror does not exist yet
    fn load(&self) -> LibraryResult<Option<Vec<BookEntity>>>;

    // replaces the mirror with the given books and returns how many were written
    fn save(&self, books: &[BookEntity]) -> LibraryResult<usize>;
}
