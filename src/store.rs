use crate::types::series::SharedSeries;

/// The last successfully fetched series for one dashboard session.
///
/// Only ever replaced wholesale; a failed fetch leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    current: Option<SharedSeries>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, series: SharedSeries) {
        self.current = Some(series);
    }

    pub fn current(&self) -> Option<&SharedSeries> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::series::{DailyRecord, DailySeries};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn series_of(days: u32) -> SharedSeries {
        let records = (1..=days)
            .map(|d| DailyRecord::empty(NaiveDate::from_ymd_opt(2024, 1, d).unwrap()))
            .collect();
        Arc::new(DailySeries::try_from_records(records).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        assert!(SeriesStore::new().current().is_none());
    }

    #[test]
    fn test_replace_overwrites_instead_of_merging() {
        let mut store = SeriesStore::new();
        store.replace(series_of(5));
        store.replace(series_of(2));
        assert_eq!(store.current().map(|s| s.len()), Some(2));
    }
}
