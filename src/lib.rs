pub mod args;
pub mod domain;
pub mod errors;
pub mod exporter;
pub mod importer;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use domain::{extract_domain, is_valid_domain};
pub use errors::ImportError;
pub use exporter::{write_csv, CsvExporter};
pub use importer::{Importer, ImporterConfig};
pub use stats::{DomainCount, ImportResult, RunStatistics};
