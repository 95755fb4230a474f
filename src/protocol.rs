/// Maps an IANA protocol number to its canonical lowercase name.
///
/// Only the protocols the lookup table distinguishes are mapped; every
/// other code collapses to "other". This is intentionally not a full
/// IANA protocol table.
pub fn protocol_name(protocol_number: &str) -> &'static str {
    match protocol_number {
        "6" => "tcp",
        "17" => "udp",
        "1" => "icmp",
        _ => "other",
    }
}
