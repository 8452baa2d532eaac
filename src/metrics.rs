//! Prometheus exposition rendering.
//!
//! Three lines per record, in record order, newline-joined with no blank
//! separators. By the time records arrive here every field is a plain
//! optional value, so rendering cannot fail. Scrapers treat these lines as
//! ground truth; the shapes below are a compatibility surface.

use crate::parse::PeerRecord;

/// `last_handshake` label format: ISO 8601, second precision, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render records into exposition text.
///
/// Absent string fields render as empty label values (the label is never
/// omitted); absent byte counts render as `0`. An empty record slice
/// renders as the empty string.
pub fn format_metrics(records: &[PeerRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() * 3);

    for record in records {
        let interface = record.interface.as_deref().unwrap_or("");
        let peer = record.peer.as_deref().unwrap_or("");
        let endpoint = record.endpoint.as_deref().unwrap_or("");
        let handshake = record
            .handshake
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();

        lines.push(format!(
            "wg_peer_info{{interface=\"{}\",peer=\"{}\",endpoint=\"{}\",last_handshake=\"{}\"}} 1",
            interface, peer, endpoint, handshake
        ));
        lines.push(format!(
            "wg_peer_rx_bytes{{interface=\"{}\",peer=\"{}\"}} {}",
            interface,
            peer,
            record.rx_bytes.unwrap_or(0)
        ));
        lines.push(format!(
            "wg_peer_tx_bytes{{interface=\"{}\",peer=\"{}\"}} {}",
            interface,
            peer,
            record.tx_bytes.unwrap_or(0)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_record() -> PeerRecord {
        PeerRecord {
            interface: Some("wg0".to_owned()),
            peer: Some("EaQ2EEbG12312awoIon+12322=".to_owned()),
            endpoint: Some("2.224.11.21:6341".to_owned()),
            handshake: Some(
                NaiveDate::from_ymd_opt(2024, 6, 14)
                    .unwrap()
                    .and_hms_opt(22, 3, 42)
                    .unwrap(),
            ),
            rx_bytes: Some(2_212_495),
            tx_bytes: Some(292_657_561),
        }
    }

    fn empty_record() -> PeerRecord {
        PeerRecord {
            interface: None,
            peer: None,
            endpoint: None,
            handshake: None,
            rx_bytes: None,
            tx_bytes: None,
        }
    }

    #[test]
    fn test_no_records_render_as_empty_string() {
        assert_eq!(format_metrics(&[]), "");
    }

    #[test]
    fn test_full_record_line_shapes() {
        let output = format_metrics(&[full_record()]);
        assert_eq!(
            output,
            "wg_peer_info{interface=\"wg0\",peer=\"EaQ2EEbG12312awoIon+12322=\",\
             endpoint=\"2.224.11.21:6341\",last_handshake=\"2024-06-14T22:03:42\"} 1\n\
             wg_peer_rx_bytes{interface=\"wg0\",peer=\"EaQ2EEbG12312awoIon+12322=\"} 2212495\n\
             wg_peer_tx_bytes{interface=\"wg0\",peer=\"EaQ2EEbG12312awoIon+12322=\"} 292657561"
        );
    }

    #[test]
    fn test_three_lines_per_record_no_blank_separators() {
        let output = format_metrics(&[full_record(), empty_record(), full_record()]);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_absent_fields_render_as_empty_labels_and_zero() {
        let output = format_metrics(&[empty_record()]);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(
            lines[0],
            "wg_peer_info{interface=\"\",peer=\"\",endpoint=\"\",last_handshake=\"\"} 1"
        );
        assert_eq!(lines[1], "wg_peer_rx_bytes{interface=\"\",peer=\"\"} 0");
        assert_eq!(lines[2], "wg_peer_tx_bytes{interface=\"\",peer=\"\"} 0");
    }
}
