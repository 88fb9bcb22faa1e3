//! Access log ingestion.
//!
//! file
//! ingest (line by line)
//! parse_line
//! StaticClassifier
//! Record
//! Publisher (the stats collector)

mod classify;
mod error;
mod parse;
mod reader;
mod record;

#[cfg(test)]
mod tests;

pub use classify::*;
pub use error::*;
pub use parse::*;
pub use reader::*;
pub use record::*;
