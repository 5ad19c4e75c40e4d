//! Parsers for specific command-line argument formats

mod approach;
pub use approach::*;
