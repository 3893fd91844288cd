//! Batch summary statistics.
//!
//! Everything here is derived from the finished result sequence in one pass;
//! nothing is updated incrementally while fetches run.

use serde::Serialize;

use crate::models::LinkResult;

pub const METRIC_TOTAL_ANALYZED: &str = "Total number of links analyzed";
pub const METRIC_TOTAL_FORBIDDEN: &str = "Total number of links with a 403 error";
pub const METRIC_INVALID_MINUS_FORBIDDEN: &str =
    "Total number of invalid URLs minus the 403 errors";
pub const METRIC_PERCENTAGE_INVALID: &str = "Percentage of invalid links (excluding 403 errors)";

/// Raw counts behind the summary, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub total: usize,
    /// Results with status 200
    pub valid: usize,
    /// `total - valid`; transport errors count as invalid
    pub invalid: usize,
    pub with_content: usize,
    /// Results with status 403
    pub forbidden: usize,
    pub invalid_minus_forbidden: usize,
    /// `invalid_minus_forbidden / (total - forbidden) * 100`, or 0 when every
    /// result is a 403 (or there are no results)
    pub percentage_invalid: f64,
}

/// Summary record returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "Total Links Analyzed")]
    pub total_links_analyzed: usize,
    #[serde(rename = "Total Invalid Links")]
    pub total_invalid_links: usize,
    #[serde(rename = "Total Links Without Minimum Content")]
    pub total_links_without_minimum_content: usize,
    #[serde(rename = "Total 403 Forbidden Errors")]
    pub total_403_forbidden_errors: usize,
    #[serde(rename = "Percentage Invalid Excluding 403")]
    pub percentage_invalid_excluding_403: f64,
}

/// One `Metric,Value` row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub metric: &'static str,
    pub value: String,
}

impl Aggregate {
    pub fn from_results(results: &[LinkResult]) -> Self {
        let total = results.len();
        let valid = results.iter().filter(|r| r.status.is_ok()).count();
        let invalid = total - valid;
        let with_content = results.iter().filter(|r| r.has_minimum_content).count();
        let forbidden = results.iter().filter(|r| r.status.is_forbidden()).count();
        let invalid_minus_forbidden = invalid - forbidden;
        let percentage_invalid = if total > forbidden {
            invalid_minus_forbidden as f64 / (total - forbidden) as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            valid,
            invalid,
            with_content,
            forbidden,
            invalid_minus_forbidden,
            percentage_invalid,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_links_analyzed: self.total,
            total_invalid_links: self.invalid,
            total_links_without_minimum_content: self.total - self.with_content,
            total_403_forbidden_errors: self.forbidden,
            percentage_invalid_excluding_403: self.percentage_invalid,
        }
    }

    /// The four report rows, in report order.
    pub fn line_items(&self) -> [SummaryLine; 4] {
        [
            SummaryLine {
                metric: METRIC_TOTAL_ANALYZED,
                value: self.total.to_string(),
            },
            SummaryLine {
                metric: METRIC_TOTAL_FORBIDDEN,
                value: self.forbidden.to_string(),
            },
            SummaryLine {
                metric: METRIC_INVALID_MINUS_FORBIDDEN,
                value: self.invalid_minus_forbidden.to_string(),
            },
            SummaryLine {
                metric: METRIC_PERCENTAGE_INVALID,
                value: format_percentage(self.percentage_invalid),
            },
        ]
    }
}

/// Two decimals and a trailing `%`, e.g. `66.67%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}
