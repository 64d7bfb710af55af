pub mod export;

pub use export::{ReportError, to_json_string, write_json};
