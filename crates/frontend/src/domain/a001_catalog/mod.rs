//! Species catalog browser
//!
//! - api.rs: remote catalog client (list and detail GETs)
//! - store.rs: snapshot, filter, paging and detail state
//! - suggestions.rs: debounced search suggestions
//! - view_model.rs: async driver, shared with the UI through context
//! - ui/: Leptos components

pub mod api;
pub mod store;
pub mod suggestions;
pub mod ui;
pub mod view_model;

pub use view_model::CatalogViewModel;
