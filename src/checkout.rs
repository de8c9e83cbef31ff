pub mod command {
    pub mod issue_book_cmd;
    pub mod return_book_cmd;
}
