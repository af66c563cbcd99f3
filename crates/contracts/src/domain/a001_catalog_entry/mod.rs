pub mod aggregate;

pub use aggregate::{CatalogEntry, CatalogListQuery, CatalogListResponse, SpeciesId};
