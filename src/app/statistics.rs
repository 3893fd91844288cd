//! End-of-batch statistics logging.

use strum::IntoEnumIterator;

use crate::app::logging::BatchLogger;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Logs error, warning, and info tallies for a finished batch.
///
/// Categories with a zero total are skipped entirely.
pub fn log_batch_statistics(logger: &BatchLogger, stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();
    let total_info = stats.total_info();

    if total_errors > 0 {
        logger.info(format_args!("Error Counts ({} total):", total_errors));
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                logger.info(format_args!("   {}: {}", error_type.as_str(), count));
            }
        }
    }

    if total_warnings > 0 {
        logger.info(format_args!("Warning Counts ({} total):", total_warnings));
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                logger.info(format_args!("   {}: {}", warning_type.as_str(), count));
            }
        }
    }

    if total_info > 0 {
        logger.info(format_args!("Info Counts ({} total):", total_info));
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                logger.info(format_args!("   {}: {}", info_type.as_str(), count));
            }
        }
    }
}
