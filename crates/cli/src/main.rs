use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use data_loader::{CreditIndex, DataLoadError, discover_dataset};
use queries::{AnalysisSuite, Report, Section};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// credit-stats - Movie credits analytics
#[derive(Parser)]
#[command(name = "credit-stats")]
#[command(about = "Run analytical queries over a movie credits CSV", long_about = None)]
struct Cli {
    /// Path to the credits CSV; when omitted, the single .csv in --dir is used
    dataset: Option<PathBuf>,

    /// Directory scanned for a .csv dataset when no path is given
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Run only these analyses (1-20); repeat the flag to select several
    #[arg(long = "only", value_name = "N")]
    only: Vec<usize>,

    /// List the available analyses and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let suite = AnalysisSuite::standard();

    if cli.list {
        for (number, header) in suite.headers() {
            println!("{:>2}. {}", number, header);
        }
        return Ok(());
    }

    if let Some(bad) = cli.only.iter().find(|&&n| n == 0 || n > suite.len()) {
        bail!("Unknown analysis number {} (expected 1-{})", bad, suite.len());
    }

    let path = resolve_dataset(cli.dataset, &cli.dir)?;

    // Load the dataset once; every analysis borrows it read-only
    let start = Instant::now();
    let index = CreditIndex::load_from_file(&path).map_err(|e| {
        let message = load_failure_message(&e, &path);
        anyhow::Error::new(e).context(message)
    })?;
    tracing::info!("Loaded dataset in {:?}", start.elapsed());

    let report = suite.run_only(&index, &cli.only);
    print_report(&report);

    Ok(())
}

/// Explicit path wins; otherwise exactly one .csv must exist in `dir`
fn resolve_dataset(explicit: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => discover_dataset(dir)
            .with_context(|| format!("Could not locate a dataset in {}", dir.display())),
    }
}

/// Headline for a failed load: a file that could not be opened reads
/// differently from one whose contents are malformed
fn load_failure_message(err: &DataLoadError, path: &Path) -> String {
    if err.is_discovery() {
        format!("Could not open dataset {}", path.display())
    } else {
        format!("Failed to parse movie credits from {}", path.display())
    }
}

/// Print every section with a colored heading
fn print_report(report: &Report) {
    for section in &report.sections {
        print_section(section);
    }
}

fn print_section(section: &Section) {
    println!();
    println!("{}", Section::separator().dimmed());
    println!();
    println!("{}", section.heading().bold().blue());

    if section.visible_lines().is_empty() {
        return;
    }
    println!();
    for line in section.visible_lines() {
        println!("{}", line);
    }
}
