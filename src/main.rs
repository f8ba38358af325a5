use std::path::PathBuf;

use anyhow::Context;
use log::info;

use graydisk::config::ConfigManager;
use graydisk::engines::generation::{ConsoleProgress, GeneticSearch};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("optimized_parameters.json"));

    let manager = ConfigManager::new();
    match &config_path {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => info!("No config file given, using built-in defaults"),
    }
    let config = manager.get();

    let mut search = GeneticSearch::new(
        config.search.clone(),
        config.goals.clone(),
        config.printer.clone(),
        config.baseline.clone(),
    );

    let mut progress = ConsoleProgress::new();
    let result = search.run(&mut progress).context("Optimization failed")?;

    println!("{}", result.summary());

    if result.has_solution() {
        result
            .save_json(&output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        println!("Result written to {}", output_path.display());
    } else {
        println!("No valid solution found; nothing written.");
    }

    Ok(())
}
