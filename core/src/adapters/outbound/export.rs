//! Report exporters. Each writes one file per student into an output
//! directory and returns the path it wrote.

mod json;
mod txt;

pub use json::JsonExporter;
pub use txt::TxtExporter;
