#[cfg(test)]
mod tests {
    use crate::output::render_report;
    use crate::stats::FlowStats;

    fn setup_stats() -> FlowStats {
        let mut stats = FlowStats::new();
        stats.tag_counts.insert("sv_P1".to_string(), 2);
        stats.tag_counts.insert("Untagged".to_string(), 1);
        stats
            .port_protocol_counts
            .insert((25, "tcp".to_string()), 2);
        stats
            .port_protocol_counts
            .insert((9999, "other".to_string()), 1);
        stats
    }

    #[test]
    fn test_render_layout() {
        let expected = "Tag Counts:\n\
                        Tag,Count\n\
                        Untagged,1\n\
                        sv_P1,2\n\
                        \n\
                        Port/Protocol Combination Counts:\n\
                        Port,Protocol,Count\n\
                        25,tcp,2\n\
                        9999,other,1\n";
        assert_eq!(render_report(&setup_stats()), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let stats = setup_stats();
        assert_eq!(render_report(&stats), render_report(&stats));
    }

    #[test]
    fn test_render_sorts_combos_by_port_then_protocol() {
        let mut stats = FlowStats::new();
        stats
            .port_protocol_counts
            .insert((80, "udp".to_string()), 1);
        stats
            .port_protocol_counts
            .insert((80, "tcp".to_string()), 1);
        stats.port_protocol_counts.insert((8, "tcp".to_string()), 1);

        let report = render_report(&stats);
        let body: Vec<&str> = report
            .lines()
            .skip_while(|l| *l != "Port,Protocol,Count")
            .skip(1)
            .collect();
        assert_eq!(body, vec!["8,tcp,1", "80,tcp,1", "80,udp,1"]);
    }

    #[test]
    fn test_render_empty_stats() {
        let expected = "Tag Counts:\n\
                        Tag,Count\n\
                        \n\
                        Port/Protocol Combination Counts:\n\
                        Port,Protocol,Count\n";
        assert_eq!(render_report(&FlowStats::new()), expected);
    }
}
