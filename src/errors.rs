use std::fmt;

/// A per-line parse failure. Non-fatal: the offending line is dropped and
/// processing continues. Parsers return this instead of logging so the
/// caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lookup row with a field count other than three.
    LookupFieldCount { line: String, fields: usize },
    /// Lookup row whose port field is not a valid port number.
    LookupInvalidPort { line: String },
    /// Flow log line with fewer than the required 14 tokens.
    FlowTokenCount { line: String, tokens: usize },
    /// Flow log line with a non-numeric version or port field.
    FlowInvalidNumber { line: String, field: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::LookupFieldCount { line, fields } => {
                write!(f, "Invalid lookup entry ({} fields): {}", fields, line)
            }
            ParseError::LookupInvalidPort { line } => {
                write!(f, "Invalid port in lookup entry: {}", line)
            }
            ParseError::FlowTokenCount { line, tokens } => {
                write!(f, "Invalid flow log entry ({} tokens): {}", tokens, line)
            }
            ParseError::FlowInvalidNumber { line, field } => {
                write!(f, "Invalid {} in flow log entry: {}", field, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}
