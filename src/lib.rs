pub mod core {
    pub mod command;
    pub mod diagnostics;
    pub mod domain;
    pub mod library;
}

pub mod books {
    pub mod domain;
    pub mod factory;
    pub mod repository;
}

pub mod catalog;
pub mod checkout;

pub mod utils {
    pub mod logs;
}
