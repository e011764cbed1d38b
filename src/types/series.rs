use crate::types::metric::DailyMetric;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// One day of observations. `None` means the archive had no value for that day.
#[derive(Debug, PartialEq, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temperature_max: Option<f64>,           // temperature_2m_max
    pub temperature_min: Option<f64>,           // temperature_2m_min
    pub temperature_mean: Option<f64>,          // temperature_2m_mean
    pub apparent_temperature_max: Option<f64>,  // apparent_temperature_max
    pub apparent_temperature_min: Option<f64>,  // apparent_temperature_min
    pub apparent_temperature_mean: Option<f64>, // apparent_temperature_mean
}

impl DailyRecord {
    /// A record with every metric unavailable.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            temperature_max: None,
            temperature_min: None,
            temperature_mean: None,
            apparent_temperature_max: None,
            apparent_temperature_min: None,
            apparent_temperature_mean: None,
        }
    }

    pub fn value(&self, metric: DailyMetric) -> Option<f64> {
        match metric {
            DailyMetric::TemperatureMax => self.temperature_max,
            DailyMetric::TemperatureMin => self.temperature_min,
            DailyMetric::TemperatureMean => self.temperature_mean,
            DailyMetric::ApparentTemperatureMax => self.apparent_temperature_max,
            DailyMetric::ApparentTemperatureMin => self.apparent_temperature_min,
            DailyMetric::ApparentTemperatureMean => self.apparent_temperature_mean,
        }
    }

    pub fn set_value(&mut self, metric: DailyMetric, value: Option<f64>) {
        let slot = match metric {
            DailyMetric::TemperatureMax => &mut self.temperature_max,
            DailyMetric::TemperatureMin => &mut self.temperature_min,
            DailyMetric::TemperatureMean => &mut self.temperature_mean,
            DailyMetric::ApparentTemperatureMax => &mut self.apparent_temperature_max,
            DailyMetric::ApparentTemperatureMin => &mut self.apparent_temperature_min,
            DailyMetric::ApparentTemperatureMean => &mut self.apparent_temperature_mean,
        };
        *slot = value;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("dates must be strictly increasing, but {next} follows {previous}")]
pub struct SeriesOrderError {
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

/// A daily time series, one [`DailyRecord`] per date, dates strictly increasing.
///
/// The archive answers with one array per metric, aligned by position. That
/// alignment is resolved once when the payload is parsed, so a `DailySeries`
/// cannot hold a value that belongs to the wrong day.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct DailySeries {
    records: Vec<DailyRecord>,
}

/// Shared handle to a series. Series are never mutated after construction.
pub type SharedSeries = Arc<DailySeries>;

impl DailySeries {
    /// # Errors
    ///
    /// Returns [`SeriesOrderError`] if two neighbouring records are not in
    /// strictly increasing date order. Gaps between dates are allowed.
    pub fn try_from_records(records: Vec<DailyRecord>) -> Result<Self, SeriesOrderError> {
        if let Some(pair) = records.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(SeriesOrderError {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.iter().map(|r| r.date)
    }

    /// The column of one metric, positionally aligned with [`DailySeries::dates`].
    pub fn values(&self, metric: DailyMetric) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(metric)).collect()
    }

    /// First and last date of the series, for captions like "from X to Y".
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }

    /// Reshapes the series into one point per day for chart consumers.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.records.iter().map(ChartPoint::from).collect()
    }
}

/// A single x-position of the temperature chart.
#[derive(Debug, PartialEq, Clone)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Every metric in [`DailyMetric::ALL`] order, gaps kept as `None`.
    pub values: Vec<(DailyMetric, Option<f64>)>,
}

impl From<&DailyRecord> for ChartPoint {
    fn from(record: &DailyRecord) -> Self {
        Self {
            date: record.date,
            values: DailyMetric::ALL
                .iter()
                .map(|&metric| (metric, record.value(metric)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn record(d: u32, max: Option<f64>) -> DailyRecord {
        DailyRecord {
            temperature_max: max,
            ..DailyRecord::empty(date(d))
        }
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let err = DailySeries::try_from_records(vec![record(1, None), record(1, None)]).unwrap_err();
        assert_eq!(
            err,
            SeriesOrderError {
                previous: date(1),
                next: date(1)
            }
        );
    }

    #[test]
    fn test_allows_gaps() {
        let series = DailySeries::try_from_records(vec![record(1, None), record(5, None)]).unwrap();
        assert_eq!(series.span(), Some((date(1), date(5))));
    }

    #[test]
    fn test_values_keep_gaps() {
        let series =
            DailySeries::try_from_records(vec![record(1, Some(0.0)), record(2, None)]).unwrap();
        assert_eq!(
            series.values(DailyMetric::TemperatureMax),
            vec![Some(0.0), None]
        );
        assert_eq!(series.values(DailyMetric::TemperatureMin), vec![None, None]);
    }

    #[test]
    fn test_chart_points_follow_metric_order() {
        let mut rec = record(3, Some(4.5));
        rec.set_value(DailyMetric::ApparentTemperatureMean, Some(-1.0));
        let series = DailySeries::try_from_records(vec![rec]).unwrap();
        let points = series.chart_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date(3));
        assert_eq!(points[0].values[0], (DailyMetric::TemperatureMax, Some(4.5)));
        assert_eq!(
            points[0].values[5],
            (DailyMetric::ApparentTemperatureMean, Some(-1.0))
        );
    }

    #[test]
    fn test_empty_series_has_no_span() {
        assert_eq!(DailySeries::default().span(), None);
        assert!(DailySeries::default().is_empty());
    }
}
