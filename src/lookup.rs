use std::collections::HashMap;
use std::fs::File;

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::errors::ParseError;

/// One row of the lookup table: a (destination port, protocol) pair and the
/// tag assigned to flows matching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRule {
    pub dst_port: u16,
    pub protocol: String,
    pub tag: String,
}

impl LookupRule {
    /// Parses a CSV record into a rule.
    ///
    /// The protocol field is taken as a literal lowercase string. It is NOT
    /// mapped through `protocol_name`; flow records carry numeric protocol
    /// codes, lookup rows carry the names themselves.
    pub fn from_record(record: &StringRecord) -> Result<Self, ParseError> {
        if record.len() != 3 {
            return Err(ParseError::LookupFieldCount {
                line: raw_line(record),
                fields: record.len(),
            });
        }

        let dst_port = record[0]
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseError::LookupInvalidPort {
                line: raw_line(record),
            })?;

        Ok(LookupRule {
            dst_port,
            protocol: record[1].trim().to_lowercase(),
            tag: record[2].trim().to_string(),
        })
    }
}

fn raw_line(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

/// Maps (destination port, protocol) to a tag. Built once from the lookup
/// table, read-only during aggregation.
#[derive(Debug, Default)]
pub struct LookupIndex {
    map: HashMap<(u16, String), String>,
}

impl LookupIndex {
    /// Builds an index from rules in input order. Rules sharing a key
    /// overwrite earlier ones, so the last rule read wins.
    pub fn from_rules(rules: impl IntoIterator<Item = LookupRule>) -> Self {
        let mut index = LookupIndex::default();
        for rule in rules {
            index.insert(rule);
        }
        index
    }

    pub fn insert(&mut self, rule: LookupRule) {
        self.map.insert((rule.dst_port, rule.protocol), rule.tag);
    }

    pub fn lookup(&self, dst_port: u16, protocol: &str) -> Option<&str> {
        self.map
            .get(&(dst_port, protocol.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Loads the lookup table from a CSV file.
///
/// The header row is skipped unconditionally. Blank lines are skipped
/// silently; malformed rows are logged and dropped. I/O errors are fatal.
pub fn load_lookup_table(path: &str) -> Result<LookupIndex, anyhow::Error> {
    debug!("Opening the lookup table: {:?} ...", path);
    let file =
        File::open(path).with_context(|| format!("failed to open lookup table {}", path))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut index = LookupIndex::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable lookup row: {}", e);
                continue;
            }
        };

        // A whitespace-only line surfaces as a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        match LookupRule::from_record(&record) {
            Ok(rule) => index.insert(rule),
            Err(e) => warn!("{}", e),
        }
    }

    debug!("Finished reading the lookup table: {:?}", path);
    Ok(index)
}
