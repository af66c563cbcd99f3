//! Types shared by the catalog browser: wire DTOs of the remote species API,
//! the records derived from them and the pure helpers the UI state is built on.

pub mod domain;
pub mod projections;
pub mod shared;
