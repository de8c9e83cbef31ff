use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> Result<BookEntity, CommandError> {
        if self.isbn.trim().is_empty() {
            return Err(CommandError::validation("isbn must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(CommandError::validation("title must not be empty"));
        }
        Ok(BookEntity::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str()))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub added: bool,
    // the catalogued record, which is the earlier book when the isbn was a duplicate
    pub book: Option<BookEntity>,
}

impl AddBookCommandResponse {
    pub fn new(added: bool, book: Option<BookEntity>) -> Self {
        Self {
            added,
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        let added = self.catalog_service.add_book(&book).await?;
        let stored = self.catalog_service.find_book_by_isbn(book.isbn.as_str()).await?;
        Ok(AddBookCommandResponse::new(added, stored))
    }
}
