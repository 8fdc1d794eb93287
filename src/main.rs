use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{error, info};

use email_domains::utils::{setup_logging, validate_args};
use email_domains::{write_csv, Args, CsvExporter, ImportResult, Importer};

fn run(args: &Args) -> Result<ImportResult> {
    validate_args(args)?;

    let importer = Importer::new(args.importer_config());
    let result = importer
        .import_domain_data()
        .context("Failed to import customer data")?;

    match &args.out {
        Some(out) => CsvExporter::new(out).export(&result.domains)?,
        None => {
            let stdout = io::stdout();
            write_csv(stdout.lock(), &result.domains).context("Failed writing to stdout")?;
        }
    }

    Ok(result)
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    match run(&args) {
        Ok(result) => {
            info!(
                action = "summary",
                file = %args.path.display(),
                total_rows = result.stats.total_rows,
                bad_rows = result.stats.bad_rows,
                unique_domains = result.stats.unique_domains,
                sorted = "count desc, domain asc",
                single_label_allowed = args.allow_single_label_domain,
                "summary"
            );
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
