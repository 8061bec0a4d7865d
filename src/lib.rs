pub mod books;
pub mod catalog;
pub mod categories;
pub mod core;
pub mod search;
pub mod utils;
