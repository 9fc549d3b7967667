//! Command-line grader: checks an HTML file or URL against a list of CSS
//! selectors and prints the results as JSON.
//!
//! ```text
//! grader --checks checks.json --file index.html
//! grader --url https://example.com/
//! ```

use clap::Parser;
use rs_grader::{assert_file_exists, logging, Options, Source, CHECKS_FILE_DEFAULT};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "grader", version, about)]
struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "check_file", default_value = CHECKS_FILE_DEFAULT)]
    checks: PathBuf,

    /// Path to index.html
    #[arg(short, long, value_name = "html_file")]
    file: Option<PathBuf>,

    /// Url address
    #[arg(short, long, value_name = "url_path")]
    url: Option<String>,

    /// Give up on the URL after this many seconds (default: wait forever)
    #[arg(long, value_name = "secs")]
    timeout: Option<u64>,

    /// Log progress to standard error
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            checks_file: self.checks.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            ..Options::default()
        }
    }
}

async fn grade(cli: &Cli) -> rs_grader::Result<String> {
    assert_file_exists(&cli.checks)?;
    let source = Source::resolve(cli.file.as_deref(), cli.url.as_deref())?;
    let report = rs_grader::run(&source, &cli.options()).await?;
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "graded {source}"
    );
    Ok(report.to_pretty_json()?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose) {
        eprintln!("Failed to initialize logging: {err}");
    }

    match grade(&cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(usage = err.is_usage(), "grading failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
