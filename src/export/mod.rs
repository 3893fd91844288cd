//! Report export.
//!
//! The batch report is a single CSV document with two tables: the summary
//! metrics, one blank line, then one row per audited URL.

mod csv;

pub use self::csv::{export_csv, render_report, write_report, RESULTS_HEADER, SUMMARY_HEADER};
