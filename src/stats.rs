use serde::Serialize;

/// Number of customers whose email address belongs to one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Row-level counters for a single import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_rows: u64,
    pub bad_rows: u64,
    pub unique_domains: usize,
}

/// Output of a successful import: domains sorted by count descending, then
/// domain ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub domains: Vec<DomainCount>,
    pub stats: RunStatistics,
}
