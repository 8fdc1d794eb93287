use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info, trace};

use crate::domain::{extract_domain, is_valid_domain, unquote};
use crate::errors::{ImportError, Result};
use crate::stats::{DomainCount, ImportResult, RunStatistics};

const READ_BUFFER_SIZE: usize = 256 << 10;
// Rough average size of one customer row, used to guess the map capacity.
const BYTES_PER_ROW_ESTIMATE: u64 = 40;
const MIN_MAP_CAPACITY: usize = 1024;
const MAX_MAP_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct ImporterConfig {
    pub path: PathBuf,
    /// Matched against header cells after trimming, ignoring case.
    pub email_header: String,
    pub allow_single_label_domain: bool,
}

pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Streams the configured file once and counts customers per email domain.
    pub fn import_domain_data(&self) -> Result<ImportResult> {
        let start_time = Instant::now();
        info!(action = "start", component = "importer", file_path = ?self.config.path, "Starting domain import");

        let file = File::open(&self.config.path)
            .map_err(|e| ImportError::unreadable(&self.config.path, e))?;
        let size_hint = file.metadata().ok().map(|m| m.len());

        let result = self.import_from_reader(file, size_hint)?;

        info!(
            action = "complete",
            component = "importer",
            total_rows = result.stats.total_rows,
            bad_rows = result.stats.bad_rows,
            unique_domains = result.stats.unique_domains,
            duration_ms = start_time.elapsed().as_millis(),
            "Domain import completed"
        );
        Ok(result)
    }

    /// Runs the pipeline over any CSV source. `size_hint` is the source size
    /// in bytes, used only to pre-size the aggregation map.
    ///
    /// A source with no records at all, not even a header, is reported as
    /// `SourceUnreadable` with `UnexpectedEof`.
    pub fn import_from_reader<R: Read>(
        &self,
        source: R,
        size_hint: Option<u64>,
    ) -> Result<ImportResult> {
        let path = &self.config.path;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .buffer_capacity(READ_BUFFER_SIZE)
            .from_reader(source);

        let headers = reader
            .byte_headers()
            .map_err(|e| ImportError::unreadable(path, e))?;
        if headers.is_empty() {
            return Err(ImportError::unreadable(
                path,
                io::Error::new(io::ErrorKind::UnexpectedEof, "source has no header row"),
            ));
        }
        let email_idx = find_header_index(headers, &self.config.email_header).ok_or_else(|| {
            ImportError::HeaderNotFound {
                header: self.config.email_header.clone(),
            }
        })?;
        debug!(action = "resolve", component = "header", column = email_idx, "Email column located");

        let mut counts: HashMap<String, u64> = HashMap::with_capacity(map_capacity(size_hint));
        let mut stats = RunStatistics::default();
        let mut record = ByteRecord::new();

        while reader
            .read_byte_record(&mut record)
            .map_err(|e| ImportError::unreadable(path, e))?
        {
            stats.total_rows += 1;

            let Some(field) = record.get(email_idx) else {
                trace!(row = stats.total_rows, fields = record.len(), "Row too short");
                stats.bad_rows += 1;
                continue;
            };

            let email = String::from_utf8_lossy(field);
            match extract_domain(&email) {
                Some(domain) if is_valid_domain(&domain, self.config.allow_single_label_domain) => {
                    if let Some(count) = counts.get_mut(&*domain) {
                        *count += 1;
                    } else {
                        counts.insert(domain.into_owned(), 1);
                    }
                }
                _ => {
                    trace!(row = stats.total_rows, email = %email, "Rejected email");
                    stats.bad_rows += 1;
                }
            }
        }

        let domains = sorted_counts(counts);
        stats.unique_domains = domains.len();
        Ok(ImportResult { domains, stats })
    }
}

fn find_header_index(headers: &ByteRecord, name: &str) -> Option<usize> {
    let target = name.trim().to_lowercase();
    headers.iter().position(|cell| {
        let cell = String::from_utf8_lossy(cell);
        unquote(cell.trim_start_matches('\u{feff}').trim())
            .trim()
            .to_lowercase()
            == target
    })
}

fn map_capacity(size_hint: Option<u64>) -> usize {
    size_hint
        .map(|size| usize::try_from(size / BYTES_PER_ROW_ESTIMATE + 1).unwrap_or(usize::MAX))
        .unwrap_or(MIN_MAP_CAPACITY)
        .clamp(MIN_MAP_CAPACITY, MAX_MAP_CAPACITY)
}

/// Count descending, then domain ascending. Keys are unique, so the order is
/// total and does not depend on map iteration order.
fn sorted_counts(counts: HashMap<String, u64>) -> Vec<DomainCount> {
    let mut domains: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();
    domains.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
    domains
}
