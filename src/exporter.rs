use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::stats::DomainCount;

const CSV_HEADER: [&str; 2] = ["domain", "number_of_customers"];

/// Writes the report to a file, creating parent directories as needed.
pub struct CsvExporter {
    out_path: PathBuf,
}

impl CsvExporter {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
        }
    }

    pub fn export(&self, domains: &[DomainCount]) -> Result<()> {
        if let Some(dir) = self.out_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {:?}", dir))?;
        }

        let file = File::create(&self.out_path)
            .with_context(|| format!("Failed to create output file {:?}", self.out_path))?;
        write_csv(file, domains)
            .with_context(|| format!("Failed to write CSV to {:?}", self.out_path))?;

        info!(action = "complete", component = "exporter", file_path = ?self.out_path, rows = domains.len(), "Report written");
        Ok(())
    }
}

/// Header is written even when `domains` is empty.
pub fn write_csv<W: Write>(writer: W, domains: &[DomainCount]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(CSV_HEADER).context("Failed to write header")?;
    for entry in domains {
        wtr.serialize(entry)
            .with_context(|| format!("Failed to write row for {}", entry.domain))?;
    }

    wtr.flush()?;
    Ok(())
}
