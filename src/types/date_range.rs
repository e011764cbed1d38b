use crate::input::error::ValidationError;
use chrono::NaiveDate;
use std::fmt;

/// Wire format for calendar dates, independent of locale.
pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of calendar dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedDateRange`] when `start` is after `end`.
    /// A single-day range (`start == end`) is valid.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(ISO_DATE_FORMAT),
            self.end.format(ISO_DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::try_new(date(2024, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::try_new(date(2024, 1, 2), date(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvertedDateRange {
                start: date(2024, 1, 2),
                end: date(2024, 1, 1)
            }
        );
    }

    #[test]
    fn test_display_is_zero_padded() {
        let range = DateRange::try_new(date(987, 3, 4), date(2024, 12, 31)).unwrap();
        assert_eq!(range.to_string(), "0987-03-04..2024-12-31");
    }
}
