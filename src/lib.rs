//! # wg-exporter
//!
//! A Prometheus exporter for WireGuard peer status. It runs `wg show` on
//! each scrape, parses the free-form text dump into typed per-peer
//! records, and renders them in the Prometheus text exposition format.
//!
//! ## Architecture
//!
//! ```text
//! wg show ──▶ source ──▶ parse ──▶ metrics ──▶ server ──▶ scraper
//!             (fetch)   (records)  (exposition)  (HTTP)
//! ```
//!
//! - **[`source`]**: where raw status text comes from - the external
//!   command, or fixed text under test
//! - **[`parse`]**: segmentation, line classification, and value
//!   normalization into [`PeerRecord`]s
//! - **[`clock`]**: the injectable reference time used to resolve relative
//!   handshake ages
//! - **[`metrics`]**: deterministic exposition rendering
//! - **[`server`]**: the HTTP endpoint Prometheus scrapes
//!
//! The parsing and formatting layers are pure functions over their inputs;
//! the reference clock is the only capability they receive.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use wg_exporter::{format_metrics, parse_status};
//!
//! let raw = "interface: wg0\npeer: abc=\n  endpoint: 10.0.0.1:51820\n";
//! let reference = NaiveDate::from_ymd_opt(2024, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let records = parse_status(raw, reference).unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(format_metrics(&records).starts_with("wg_peer_info{interface=\"wg0\""));
//! ```

pub mod clock;
pub mod metrics;
pub mod parse;
pub mod server;
pub mod source;

// Re-export the main types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use metrics::format_metrics;
pub use parse::{parse_status, ParseError, PeerRecord};
pub use server::{collect, run_server};
pub use source::{CommandSource, FixedSource, StatusSource};
