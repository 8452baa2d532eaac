//! Single-pass line classification and per-block field extraction.
//!
//! Each line is classified once by its leading key phrase; a fold over the
//! classified lines then recovers a block's fields. The first matching line
//! wins for every field, later matches are ignored.

/// One raw status line, tagged by the field it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `interface: <name>`
    Interface(&'a str),
    /// `peer: <public key>`
    Peer(&'a str),
    /// `endpoint: <ip:port>`
    Endpoint(&'a str),
    /// `latest handshake: <relative age> ago`
    Handshake(&'a str),
    /// `transfer: <size> received, <size> sent`, split into the two size
    /// tokens (e.g. `"2.11 MiB"`).
    Transfer { rx: &'a str, tx: &'a str },
    /// Anything else (hidden keys, allowed ips, blank lines, garbage).
    Other,
}

/// Classify a single status line.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix("interface:") {
        return Line::Interface(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("peer:") {
        return Line::Peer(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("endpoint:") {
        return Line::Endpoint(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("latest handshake:") {
        return Line::Handshake(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("transfer:") {
        if let Some((rx, tx)) = split_transfer(rest) {
            return Line::Transfer { rx, tx };
        }
    }
    Line::Other
}

/// Split `"<size> received, <size> sent"` into its two size tokens.
fn split_transfer(rest: &str) -> Option<(&str, &str)> {
    let (rx, tx) = rest.split_once(',')?;
    let rx = rx.trim().strip_suffix("received")?.trim();
    let tx = tx.trim().strip_suffix("sent")?.trim();
    Some((rx, tx))
}

/// The fields recovered from one block, first matching line per field.
///
/// Every field is optional: a block that never mentions a field resolves it
/// to `None`, which never aborts extraction of the remaining fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockFields<'a> {
    pub interface: Option<&'a str>,
    pub peer: Option<&'a str>,
    pub endpoint: Option<&'a str>,
    pub handshake: Option<&'a str>,
    pub transfer: Option<(&'a str, &'a str)>,
}

/// Fold a block's lines into its fields.
pub fn extract<'a>(lines: &[&'a str]) -> BlockFields<'a> {
    let mut fields = BlockFields::default();
    for line in lines {
        match classify(line) {
            Line::Interface(name) => {
                fields.interface.get_or_insert(name);
            }
            Line::Peer(key) => {
                fields.peer.get_or_insert(key);
            }
            Line::Endpoint(endpoint) => {
                fields.endpoint.get_or_insert(endpoint);
            }
            Line::Handshake(phrase) => {
                fields.handshake.get_or_insert(phrase);
            }
            Line::Transfer { rx, tx } => {
                fields.transfer.get_or_insert((rx, tx));
            }
            Line::Other => {}
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_key_phrases() {
        assert_eq!(classify("interface: wg0"), Line::Interface("wg0"));
        assert_eq!(
            classify("  peer: EaQ2EEbG12312awoIon+12322="),
            Line::Peer("EaQ2EEbG12312awoIon+12322=")
        );
        assert_eq!(
            classify("  endpoint: 2.224.11.21:6341"),
            Line::Endpoint("2.224.11.21:6341")
        );
        assert_eq!(
            classify("  latest handshake: 13 hours, 56 minutes, 18 seconds ago"),
            Line::Handshake("13 hours, 56 minutes, 18 seconds ago")
        );
        assert_eq!(
            classify("  transfer: 2.11 MiB received, 279.10 MiB sent"),
            Line::Transfer {
                rx: "2.11 MiB",
                tx: "279.10 MiB"
            }
        );
        assert_eq!(classify("  preshared key: (hidden)"), Line::Other);
        assert_eq!(classify(""), Line::Other);
    }

    #[test]
    fn test_malformed_transfer_is_other() {
        assert_eq!(classify("transfer: lots of bytes"), Line::Other);
        assert_eq!(classify("transfer: 1 B received"), Line::Other);
    }

    #[test]
    fn test_extract_first_match_wins() {
        let lines = vec![
            "peer: first=",
            "  endpoint: 10.0.0.1:51820",
            "peer: second=",
            "  endpoint: 10.0.0.2:51820",
        ];
        let fields = extract(&lines);
        assert_eq!(fields.peer, Some("first="));
        assert_eq!(fields.endpoint, Some("10.0.0.1:51820"));
    }

    #[test]
    fn test_extract_missing_fields_resolve_to_none() {
        let lines = vec!["peer: abc=", "  allowed ips: (hidden)"];
        let fields = extract(&lines);
        assert_eq!(fields.peer, Some("abc="));
        assert_eq!(fields.endpoint, None);
        assert_eq!(fields.handshake, None);
        assert_eq!(fields.transfer, None);
    }

    #[test]
    fn test_extract_full_peer_block() {
        let lines = vec![
            "peer: abc=",
            "  preshared key: (hidden)",
            "  endpoint: 2.224.11.21:6341",
            "  latest handshake: 2 minutes ago",
            "  transfer: 1.00 KiB received, 4.00 KiB sent",
        ];
        let fields = extract(&lines);
        assert_eq!(
            fields,
            BlockFields {
                interface: None,
                peer: Some("abc="),
                endpoint: Some("2.224.11.21:6341"),
                handshake: Some("2 minutes ago"),
                transfer: Some(("1.00 KiB", "4.00 KiB")),
            }
        );
    }
}
