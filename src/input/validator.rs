//! Turns raw form input into a validated [`Coordinate`] and [`DateRange`].

use crate::input::error::{Field, ValidationError};
use crate::types::coordinate::Coordinate;
use crate::types::date_range::DateRange;
use chrono::{Days, NaiveDate, Utc};

const DEFAULT_LATITUDE: &str = "40.7128";
const DEFAULT_LONGITUDE: &str = "-74.0060";
const DEFAULT_LOOKBACK_DAYS: u64 = 30;

/// Snapshot of what the user has typed or picked, before validation.
///
/// Coordinates are kept as text exactly as entered; dates come from a date
/// picker and are `None` until one is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub latitude: String,
    pub longitude: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FormInputs {
    /// Initial form contents: New York City over the 30 days ending `today`.
    pub fn defaults_for(today: NaiveDate) -> Self {
        Self {
            latitude: DEFAULT_LATITUDE.to_string(),
            longitude: DEFAULT_LONGITUDE.to_string(),
            start_date: today.checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS)),
            end_date: Some(today),
        }
    }

    pub fn validate(&self) -> Result<ValidatedInput, ValidationError> {
        validate(
            &self.latitude,
            &self.longitude,
            self.start_date,
            self.end_date,
        )
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::defaults_for(Utc::now().date_naive())
    }
}

/// Output of a successful [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub coordinate: Coordinate,
    pub range: DateRange,
}

/// Validates raw form input.
///
/// Rules are checked in a fixed order and the first failure wins:
///
/// 1. every field is present (blank text counts as missing),
/// 2. latitude and longitude parse as finite decimals,
/// 3. latitude is within `[-90, 90]`,
/// 4. longitude is within `[-180, 180]`,
/// 5. the start date is not after the end date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_archive::{validate, Field, ValidationError};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let input = validate("40.7128", "-74.0060", day, day).unwrap();
/// assert_eq!(input.coordinate.longitude(), -74.006);
///
/// assert_eq!(
///     validate("", "999", day, day),
///     Err(ValidationError::MissingField(Field::Latitude))
/// );
/// ```
pub fn validate(
    latitude: &str,
    longitude: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<ValidatedInput, ValidationError> {
    let latitude = present(latitude, Field::Latitude)?;
    let longitude = present(longitude, Field::Longitude)?;
    let start = start_date.ok_or(ValidationError::MissingField(Field::StartDate))?;
    let end = end_date.ok_or(ValidationError::MissingField(Field::EndDate))?;

    let latitude = parse_decimal(latitude, Field::Latitude)?;
    let longitude = parse_decimal(longitude, Field::Longitude)?;

    Ok(ValidatedInput {
        coordinate: Coordinate::try_new(latitude, longitude)?,
        range: DateRange::try_new(start, end)?,
    })
}

fn present(text: &str, field: Field) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_decimal(text: &str, field: Field) -> Result<f64, ValidationError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::NotANumber(field))
}
