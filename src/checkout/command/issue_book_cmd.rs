use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct IssueBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl IssueBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueBookCommandRequest {
    isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub isbn: String,
    pub issued: bool,
}

impl IssueBookCommandResponse {
    pub fn new(isbn: &str, issued: bool) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
            issued,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.catalog_service.issue_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(|issued| IssueBookCommandResponse::new(req.isbn.as_str(), issued))
    }
}
