//! CSV report rendering.
//!
//! Layout:
//!
//! ```text
//! Metric,Value
//! Total number of links analyzed,3
//! ...
//!
//! URL,Status Code,Has Minimum Content
//! https://example.com,200,Yes
//! ```
//!
//! Lines end with `\n`; fields are quoted only when they contain a delimiter,
//! a quote or a line break.

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use std::io::{self, Write};
use std::path::Path;

use crate::aggregate::{Aggregate, SummaryLine};
use crate::models::LinkResult;

pub const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];
pub const RESULTS_HEADER: [&str; 3] = ["URL", "Status Code", "Has Minimum Content"];

fn csv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Writes the two-table report to `out`.
///
/// Returns the number of URL rows written.
pub fn write_report<W: Write>(
    mut out: W,
    summary_lines: &[SummaryLine],
    results: &[LinkResult],
) -> Result<usize> {
    {
        let mut writer = csv_writer(&mut out);
        writer.write_record(SUMMARY_HEADER)?;
        for line in summary_lines {
            writer.write_record([line.metric, line.value.as_str()])?;
        }
        writer.flush().context("Failed to write summary table")?;
    }

    out.write_all(b"\n")?;

    let mut writer = csv_writer(&mut out);
    writer.write_record(RESULTS_HEADER)?;
    for result in results {
        writer.write_record([
            result.url.as_str(),
            result.status.to_string().as_str(),
            yes_no(result.has_minimum_content),
        ])?;
    }
    writer.flush().context("Failed to write results table")?;

    Ok(results.len())
}

/// Renders the full report as a string.
pub fn render_report(aggregate: &Aggregate, results: &[LinkResult]) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, &aggregate.line_items(), results)?;
    String::from_utf8(buffer).context("CSV report is not valid UTF-8")
}

/// Writes the report to `output`, or to stdout when `output` is `None`.
///
/// Returns the number of URL rows written.
pub fn export_csv(
    aggregate: &Aggregate,
    results: &[LinkResult],
    output: Option<&Path>,
) -> Result<usize> {
    let out: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(io::stdout().lock())
    };

    write_report(out, &aggregate.line_items(), results)
}
