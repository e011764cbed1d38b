use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// The form field a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
    StartDate,
    EndDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::StartDate => "start date",
            Field::EndDate => "end date",
        };
        f.write_str(name)
    }
}

/// A user-correctable problem with the form input. Only the first violation is reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields ({0} is missing)")]
    MissingField(Field),

    #[error("The {0} must be a number")]
    NotANumber(Field),

    #[error("Latitude must be a number between -90 and 90 (got {0})")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be a number between -180 and 180 (got {0})")]
    LongitudeOutOfRange(f64),

    #[error("Start date {start} cannot be after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}
