use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub isbn: String,
    pub returned: bool,
}

impl ReturnBookCommandResponse {
    pub fn new(isbn: &str, returned: bool) -> Self {
        Self {
            isbn: isbn.trim().to_string(),
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(|returned| ReturnBookCommandResponse::new(req.isbn.as_str(), returned))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::factory::create_catalog_service_with;
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::core::command::Command;
    use crate::core::diagnostics::RecordingDiagnostics;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Configuration::new(&dir.path().join("catalog.json"));
        let svc = create_catalog_service_with(&config, Arc::new(RecordingDiagnostics::new()));
        let _ = svc.add_book(&BookEntity::new("111", "Dune", "Frank Herbert")).await.expect("should add book");
        let _ = svc.issue_book("111").await.expect("should issue book");
        let return_cmd = ReturnBookCommand::new(svc);

        let res = return_cmd.execute(ReturnBookCommandRequest::new("111".to_string())).await.expect("should return book");
        assert_eq!("111", res.isbn.as_str());
        assert!(res.returned);

        let res = return_cmd.execute(ReturnBookCommandRequest::new("111".to_string())).await.expect("should run");
        assert!(!res.returned);

        let res = return_cmd.execute(ReturnBookCommandRequest::new("999".to_string())).await.expect("should run");
        assert!(!res.returned);
    }
}
