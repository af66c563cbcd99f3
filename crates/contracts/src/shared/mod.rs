pub mod error;
pub mod pagination;
pub mod request_seq;
pub mod search;
