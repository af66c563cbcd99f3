pub mod a001_catalog_entry;
pub mod a002_species_detail;
