//! The text-to-record parsing pipeline.
//!
//! Raw `wg show` output flows through marker segmentation
//! ([`split_by_marker`]), single-pass line classification ([`classify`],
//! [`extract`]) and value normalization ([`resolve_relative`],
//! [`parse_bytes`]) into one [`PeerRecord`] per peer block. The
//! pipeline is pure: its only inputs are the raw text and an explicit
//! reference time.

mod bytes;
mod fields;
mod segment;
mod time;

pub use bytes::{parse_bytes, ParseError};
pub use fields::{classify, extract, BlockFields, Line};
pub use segment::split_by_marker;
pub use time::resolve_relative;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Marker substring opening an interface section.
pub const INTERFACE_MARKER: &str = "interface:";
/// Marker substring opening a peer section.
pub const PEER_MARKER: &str = "peer:";

/// One WireGuard peer as seen in a single status dump.
///
/// Every field is explicitly optional; a field the source block never
/// mentioned stays `None` rather than holding a sentinel. `handshake` is
/// an absolute naive-local timestamp resolved against the reference time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerRecord {
    pub interface: Option<String>,
    pub peer: Option<String>,
    pub endpoint: Option<String>,
    pub handshake: Option<NaiveDateTime>,
    pub rx_bytes: Option<u64>,
    pub tx_bytes: Option<u64>,
}

/// Parse raw status text into one record per peer block.
///
/// Interface blocks are visited in input order, peer blocks within them
/// likewise, and each record's `interface` is the name of its enclosing
/// interface block (absent when the marker line carried no parseable
/// name). An unrecognized byte-size unit aborts the whole parse; every
/// other missing or unparseable field degrades to `None` for that field
/// only.
pub fn parse_status(raw: &str, reference: NaiveDateTime) -> Result<Vec<PeerRecord>, ParseError> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut records = Vec::new();

    for interface_block in split_by_marker(&lines, INTERFACE_MARKER) {
        let interface = extract(&interface_block)
            .interface
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        for peer_block in split_by_marker(&interface_block, PEER_MARKER) {
            let block = extract(&peer_block);
            let (rx_bytes, tx_bytes) = match block.transfer {
                Some((rx, tx)) => (Some(parse_bytes(rx)?), Some(parse_bytes(tx)?)),
                None => (None, None),
            };

            records.push(PeerRecord {
                interface: interface.clone(),
                peer: block.peer.map(str::to_owned),
                endpoint: block.endpoint.map(str::to_owned),
                handshake: block.handshake.map(|phrase| resolve_relative(phrase, reference)),
                rx_bytes,
                tx_bytes,
            });
        }
    }

    Ok(records)
}
