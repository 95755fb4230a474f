use crate::errors::ParseError;
use crate::protocol::protocol_name;

/// The minimum number of whitespace-separated fields in a flow log line.
pub const MIN_FIELDS: usize = 14;

/// One parsed line of flow telemetry.
///
/// Only the first eight fields are retained; fields 8..13 must be present
/// but are not used downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub version: i32,
    pub account_id: String,
    pub interface_id: String,
    pub src_addr: String,
    pub dst_addr: String,
    pub src_port: u16,
    pub dst_port: u16,
    pub protocol: String,
}

impl FlowRecord {
    /// Parses a whitespace-delimited flow log line.
    ///
    /// The parse is atomic: any bad field drops the whole record. The
    /// numeric protocol code is normalized to its canonical name.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_FIELDS {
            return Err(ParseError::FlowTokenCount {
                line: line.trim().to_string(),
                tokens: tokens.len(),
            });
        }

        let version = parse_number(tokens[0], line, "version")?;
        let src_port = parse_number(tokens[5], line, "source port")?;
        let dst_port = parse_number(tokens[6], line, "destination port")?;

        Ok(FlowRecord {
            version,
            account_id: tokens[1].to_string(),
            interface_id: tokens[2].to_string(),
            src_addr: tokens[3].to_string(),
            dst_addr: tokens[4].to_string(),
            src_port,
            dst_port,
            protocol: protocol_name(tokens[7]).to_string(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    token: &str,
    line: &str,
    field: &'static str,
) -> Result<T, ParseError> {
    token.parse::<T>().map_err(|_| ParseError::FlowInvalidNumber {
        line: line.trim().to_string(),
        field,
    })
}
