use anyhow::{Context, Result};
use data_loader::{discover_dataset, CreditIndex};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => discover_dataset(Path::new("."))?,
    };

    println!("Loading movie credits from {}...\n", path.display());

    let start = Instant::now();
    let index = CreditIndex::load_from_file(&path).context("Failed to load dataset")?;
    let elapsed = start.elapsed();

    let (movies, cast, crew) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Cast entries: {}", cast);
    println!("Crew entries: {}", crew);
    println!(
        "\nPerformance: {:.0} movies/second",
        movies as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
