pub mod domain;
pub mod factory;
pub mod store;

pub mod command {
    pub mod add_book_cmd;
    pub mod find_book_cmd;
    pub mod list_books_cmd;
    pub mod search_books_cmd;
}
