//! Read-only views over finished statistics: a console table and a JSON file.

mod console;
mod error;
mod json;
mod summary;

#[cfg(test)]
mod tests;

pub use console::render_console;
pub use error::ReportError;
pub use json::*;
pub use summary::*;
