use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOOKUP_PATH: &str = "data/lookup.csv";
pub const DEFAULT_FLOWLOG_PATH: &str = "data/flowlogs.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Path to a TOML configuration file replacing the CLI options below
    #[clap(short, long)]
    pub config_file: Option<String>,

    /// Input file locations
    #[clap(flatten)]
    pub input: InputConfig,

    /// Report destination
    #[clap(flatten)]
    pub output: OutputConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// The lookup table CSV mapping (dstport, protocol) to a tag
    #[clap(long, default_value = DEFAULT_LOOKUP_PATH)]
    pub lookup_path: String,

    /// The flow log file to classify
    #[clap(long, default_value = DEFAULT_FLOWLOG_PATH)]
    pub flowlog_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            lookup_path: DEFAULT_LOOKUP_PATH.to_string(),
            flowlog_path: DEFAULT_FLOWLOG_PATH.to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output method
    #[clap(short, long, value_enum, default_value = "file")]
    pub output: ExportMethodType,

    /// The directory the timestamped report file is written to
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            output: ExportMethodType::File,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethodType {
    /// The report will be printed to the console
    Print,

    /// The report will be written to a timestamped file in the output directory
    File,
}

/// On-disk configuration file layout, loaded with confy.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Resolved run configuration, from CLI arguments or a configuration file.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}
