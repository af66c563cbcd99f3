pub mod projection;

pub use projection::{AlphabetHistogram, LetterCount};
