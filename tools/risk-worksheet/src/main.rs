//! Binary entrypoint: run the embedded worksheet and print the report to stdout.
//!
//! Logs go to stderr (`RUST_LOG` overrides the default `warn` filter).
//! Exit codes: 0 on success, 2 when the catalog is inconsistent, 1 on I/O failure.

use risk_worksheet::{report, Worksheet, WorksheetError};
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    debug!(error = ?e, "worksheet failed");
    let _ = writeln!(io::stderr(), "risk-worksheet error: {}", e);
    if e.is_data_error() {
      let _ = writeln!(
        io::stderr(),
        "check that every risk and action code matches the catalog"
      );
      process::exit(2);
    }
    process::exit(1);
  }
}

fn run_binary() -> Result<(), WorksheetError> {
  let mut worksheet = Worksheet::embedded()?;
  let result = worksheet.run()?;

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  report::write_report(&mut out, &result, worksheet.config())?;
  out.flush()?;
  Ok(())
}
