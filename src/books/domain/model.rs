use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryResult};

// BookEntity abstracts a catalogued physical book, keyed by its isbn. The issued flag is
// the only field that changes after the book has been added.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub issued: bool,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            issued: false,
        }
    }

    pub fn from_representation(value: Value) -> LibraryResult<Self> {
        let mut book: BookEntity = serde_json::from_value(value)?;
        book.isbn = book.isbn.trim().to_string();
        Ok(book)
    }

    pub fn to_representation(&self) -> LibraryResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    // available -> issued
    pub fn issue(&mut self) -> bool {
        if self.is_issued() {
            return false;
        }
        self.issued = true;
        true
    }

    // issued -> available
    pub fn return_book(&mut self) -> bool {
        if !self.is_issued() {
            return false;
        }
        self.issued = false;
        true
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        if self.issued {
            BookStatus::Issued
        } else {
            BookStatus::Available
        }
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.status())
    }
}
