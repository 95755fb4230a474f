use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use log::{debug, warn};

use crate::args::ExportMethodType;
use crate::stats::FlowStats;

pub struct ReportWriter {
    method: ExportMethodType,
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(method: ExportMethodType, output_dir: impl Into<PathBuf>) -> Self {
        ReportWriter {
            method,
            output_dir: output_dir.into(),
        }
    }

    /// Writes the report, returning the created file path for file output.
    ///
    /// Directory creation failure is a warning, not an abort; if the
    /// directory is really unusable the file create below reports it.
    pub fn write(&self, stats: &FlowStats) -> Result<Option<PathBuf>, anyhow::Error> {
        let report = render_report(stats);

        match self.method {
            ExportMethodType::Print => {
                debug!("Writing report to stdout");
                let mut stdout = std::io::stdout();
                stdout.write_all(report.as_bytes())?;
                stdout.flush()?;
                Ok(None)
            }
            ExportMethodType::File => {
                if let Err(e) = fs::create_dir_all(&self.output_dir) {
                    warn!(
                        "Failed to create output directory {}: {}",
                        self.output_dir.display(),
                        e
                    );
                }

                let timestamp = Local::now().format("%Y%m%d_%H%M%S");
                let path = self.output_dir.join(format!("output_{}.txt", timestamp));
                debug!("Writing report to {:?}", path);

                let file = File::create(&path)
                    .with_context(|| format!("failed to create report file {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                writer.write_all(report.as_bytes())?;
                writer.flush()?;
                Ok(Some(path))
            }
        }
    }
}

/// Renders both count tables. Keys are written in sorted order so repeated
/// runs over the same data produce byte-identical reports.
pub fn render_report(stats: &FlowStats) -> String {
    let mut out = String::new();

    out.push_str("Tag Counts:\n");
    out.push_str("Tag,Count\n");
    let mut tags: Vec<_> = stats.tag_counts.iter().collect();
    tags.sort_by(|a, b| a.0.cmp(b.0));
    for (tag, count) in tags {
        out.push_str(&format!("{},{}\n", tag, count));
    }

    out.push('\n');
    out.push_str("Port/Protocol Combination Counts:\n");
    out.push_str("Port,Protocol,Count\n");
    let mut combos: Vec<_> = stats.port_protocol_counts.iter().collect();
    combos.sort();
    for ((port, protocol), count) in combos {
        out.push_str(&format!("{},{},{}\n", port, protocol, count));
    }

    out
}
