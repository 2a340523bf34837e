//! Payload content detection
//!
//! Stateless classifiers that borrow raw payload bytes supplied by the
//! enclosing inspection pipeline, plus a reporting layer for tools that load
//! payloads from files or the command line.

pub mod readable;
pub mod report;

// Re-export for convenience
pub use readable::{
    find_readable_string, has_human_readable_string, is_plausible_pair, is_readable_byte,
    ReadableMatch, ReadableScanner, ScanOutcome, SENTINEL,
};
pub use report::{inspect, InspectSettings, InspectionReport, PayloadSource};
