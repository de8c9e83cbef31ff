use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBookCommandRequest {
    pub isbn: String,
}

#[derive(Debug, Serialize)]
pub struct FindBookCommandResponse {
    pub book: Option<BookEntity>,
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(|book| FindBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::diagnostics::RecordingDiagnostics;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_find_book() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = factory::create_catalog_service_with(
            &Configuration::new(&dir.path().join("catalog.json")), Arc::new(RecordingDiagnostics::new()));
        let _ = svc.add_book(&BookEntity::new("111", "Dune", "Frank Herbert")).await.expect("should add book");
        let cmd = FindBookCommand::new(svc);

        let res = cmd.execute(FindBookCommandRequest { isbn: "111 ".to_string() }).await.expect("should find");
        assert_eq!("Dune", res.book.expect("should exist").title.as_str());

        let res = cmd.execute(FindBookCommandRequest { isbn: "999".to_string() }).await.expect("should not fail");
        assert!(res.book.is_none());
    }
}
