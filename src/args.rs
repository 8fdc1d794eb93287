use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "email-domains",
    about = "Count customers per email domain in a CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the CSV file with customer data
    #[arg(short, long)]
    pub path: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Email column header (case-insensitive)
    #[arg(long, default_value = "email")]
    pub email_header: String,

    /// Accept domains without a dot (e.g. user@corp)
    #[arg(long)]
    pub allow_single_label_domain: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn importer_config(&self) -> crate::ImporterConfig {
        crate::ImporterConfig {
            path: self.path.clone(),
            email_header: self.email_header.clone(),
            allow_single_label_domain: self.allow_single_label_domain,
        }
    }
}
