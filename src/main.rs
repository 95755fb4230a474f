mod args;
mod errors;
mod flow_record;
mod lookup;
mod output;
mod protocol;
mod stats;
mod tests;

use std::time::Instant;

use args::{Cli, Config, ConfigFile};
use clap::Parser;
use log::{error, info};
use output::ReportWriter;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // If a config file is provided, it replaces the CLI option groups
    let config: Config = if let Some(config_path) = cli.config_file {
        match confy::load_path::<ConfigFile>(config_path) {
            Ok(cfg_file) => Config {
                input: cfg_file.input,
                output: cfg_file.output,
            },
            Err(e) => {
                error!("Error loading configuration file: {:?}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config {
            input: cli.input,
            output: cli.output,
        }
    };

    if let Err(e) = run(config) {
        error!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), anyhow::Error> {
    let start = Instant::now();

    let index = lookup::load_lookup_table(&config.input.lookup_path)?;
    info!(
        "Loaded {} lookup rules from {}",
        index.len(),
        config.input.lookup_path
    );

    let flow_stats = stats::aggregate_file(&config.input.flowlog_path, &index)?;
    info!(
        "Tallied {} flow records from {}",
        flow_stats.total_records(),
        config.input.flowlog_path
    );

    let writer = ReportWriter::new(config.output.output, config.output.output_dir);
    if let Some(path) = writer.write(&flow_stats)? {
        info!("Report written to {}", path.display());
    }

    info!(
        "Duration: {:.4} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
