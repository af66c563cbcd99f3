pub mod aggregate;

pub use aggregate::{format_measure, DetailRecord, SpeciesDetailDto, StatEntry, TraitEntry};
