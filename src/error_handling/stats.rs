//! Per-batch processing statistics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// Thread-safe counters for one batch.
///
/// Every variant of each category is present from construction, so increments
/// never allocate. Shared across fetch workers behind an `Arc`.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

fn zeroed<T: IntoEnumIterator + std::hash::Hash + Eq>() -> HashMap<T, AtomicUsize> {
    T::iter().map(|key| (key, AtomicUsize::new(0))).collect()
}

fn bump<T: std::hash::Hash + Eq + std::fmt::Debug>(map: &HashMap<T, AtomicUsize>, key: T) {
    match map.get(&key) {
        Some(counter) => {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        None => log::error!("No counter registered for {:?}", key),
    }
}

fn read<T: std::hash::Hash + Eq>(map: &HashMap<T, AtomicUsize>, key: T) -> usize {
    map.get(&key)
        .map(|counter| counter.load(Ordering::Relaxed))
        .unwrap_or(0)
}

fn sum<T>(map: &HashMap<T, AtomicUsize>) -> usize {
    map.values()
        .map(|counter| counter.load(Ordering::Relaxed))
        .sum()
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            errors: zeroed(),
            warnings: zeroed(),
            info: zeroed(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        bump(&self.errors, error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        bump(&self.warnings, warning);
    }

    pub fn increment_info(&self, info: InfoType) {
        bump(&self.info, info);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        read(&self.errors, error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        read(&self.warnings, warning)
    }

    pub fn get_info_count(&self, info: InfoType) -> usize {
        read(&self.info, info)
    }

    pub fn total_errors(&self) -> usize {
        sum(&self.errors)
    }

    pub fn total_warnings(&self) -> usize {
        sum(&self.warnings)
    }

    pub fn total_info(&self) -> usize {
        sum(&self.info)
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_concurrent_increments() {
        let stats = Arc::new(ProcessingStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    stats.increment_info(InfoType::HttpNotFound);
                }
            }));
        }
        for handle in handles {
            handle.await.expect("task should not panic");
        }
        assert_eq!(stats.get_info_count(InfoType::HttpNotFound), 800);
        assert_eq!(stats.total_info(), 800);
    }
}
