#[cfg(test)]
mod tests {
    use crate::errors::ParseError;
    use crate::lookup::{LookupIndex, LookupRule};
    use csv::StringRecord;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn rule(dst_port: u16, protocol: &str, tag: &str) -> LookupRule {
        LookupRule {
            dst_port,
            protocol: protocol.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_rule() {
        let rule = LookupRule::from_record(&record(&["25", "tcp", "sv_P1"])).unwrap();
        assert_eq!(rule.dst_port, 25);
        assert_eq!(rule.protocol, "tcp");
        assert_eq!(rule.tag, "sv_P1");
    }

    #[test]
    fn test_protocol_lowercased() {
        let rule = LookupRule::from_record(&record(&["443", "TCP", "sv_P2"])).unwrap();
        assert_eq!(rule.protocol, "tcp");
    }

    #[test]
    fn test_fields_trimmed() {
        let rule = LookupRule::from_record(&record(&[" 25 ", " Udp ", " email "])).unwrap();
        assert_eq!(rule.dst_port, 25);
        assert_eq!(rule.protocol, "udp");
        assert_eq!(rule.tag, "email");
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let err = LookupRule::from_record(&record(&["25", "tcp"])).unwrap_err();
        assert!(matches!(err, ParseError::LookupFieldCount { fields: 2, .. }));

        let err = LookupRule::from_record(&record(&["25", "tcp", "sv_P1", "extra"])).unwrap_err();
        assert!(matches!(err, ParseError::LookupFieldCount { fields: 4, .. }));
    }

    #[test]
    fn test_invalid_port_rejected() {
        for port in ["eighty", "-1", "70000", ""] {
            let err = LookupRule::from_record(&record(&[port, "tcp", "sv_P1"])).unwrap_err();
            assert!(
                matches!(err, ParseError::LookupInvalidPort { .. }),
                "port {:?} should be rejected",
                port
            );
        }
    }

    #[test]
    fn test_last_rule_wins() {
        let index = LookupIndex::from_rules(vec![
            rule(25, "tcp", "sv_P1"),
            rule(443, "tcp", "sv_P2"),
            rule(25, "tcp", "email"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup(25, "tcp"), Some("email"));
        assert_eq!(index.lookup(443, "tcp"), Some("sv_P2"));
    }

    #[test]
    fn test_lookup_miss() {
        let index = LookupIndex::from_rules(vec![rule(25, "tcp", "sv_P1")]);
        assert_eq!(index.lookup(25, "udp"), None);
        assert_eq!(index.lookup(26, "tcp"), None);
        assert!(!index.is_empty());
    }
}
