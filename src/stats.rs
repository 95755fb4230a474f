use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Context;
use log::{debug, warn};

use crate::flow_record::FlowRecord;
use crate::lookup::LookupIndex;

/// The tag assigned to records with no matching lookup rule.
pub const UNTAGGED: &str = "Untagged";

/// Accumulated counts for one run: per tag and per (destination port,
/// protocol) pair. A plain value passed into and returned from the
/// aggregation pass, no shared state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowStats {
    pub tag_counts: HashMap<String, u64>,
    pub port_protocol_counts: HashMap<(u16, String), u64>,
}

impl FlowStats {
    pub fn new() -> Self {
        FlowStats::default()
    }

    /// Tallies one record against the index. Every record contributes
    /// exactly one unit to each table.
    pub fn record(&mut self, record: &FlowRecord, index: &LookupIndex) {
        let tag = index
            .lookup(record.dst_port, &record.protocol)
            .unwrap_or(UNTAGGED);

        *self.tag_counts.entry(tag.to_string()).or_insert(0) += 1;
        *self
            .port_protocol_counts
            .entry((record.dst_port, record.protocol.clone()))
            .or_insert(0) += 1;
    }

    /// Total number of records tallied.
    pub fn total_records(&self) -> u64 {
        self.tag_counts.values().sum()
    }
}

/// Folds a sequence of records into a fresh accumulator. Counts do not
/// depend on record order.
pub fn aggregate(
    records: impl IntoIterator<Item = FlowRecord>,
    index: &LookupIndex,
) -> FlowStats {
    let mut stats = FlowStats::new();
    for record in records {
        stats.record(&record, index);
    }
    stats
}

/// Streams the flow log line by line and tallies each record as it is
/// parsed, without materializing the full record list.
///
/// Blank lines are skipped silently; malformed lines are logged and
/// dropped. I/O errors are fatal.
pub fn aggregate_file(path: &str, index: &LookupIndex) -> Result<FlowStats, anyhow::Error> {
    debug!("Opening the flow log: {:?} ...", path);
    let file = File::open(path).with_context(|| format!("failed to open flow log {}", path))?;
    let reader = BufReader::new(file);

    let mut stats = FlowStats::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read flow log {}", path))?;
        if line.trim().is_empty() {
            continue;
        }
        match FlowRecord::parse(&line) {
            Ok(record) => stats.record(&record, index),
            Err(e) => warn!("{}", e),
        }
    }

    debug!("Finished reading the flow log: {:?}", path);
    Ok(stats)
}
