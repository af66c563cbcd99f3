pub mod alphabet_summary;
pub mod details;
pub mod list;
pub mod page;
pub mod search_bar;

pub use page::CatalogPage;
