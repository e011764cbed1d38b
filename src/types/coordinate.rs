use crate::input::error::{Field, ValidationError};
use std::fmt;

/// A validated geographical coordinate.
///
/// Latitude is guaranteed to lie in `[-90, 90]` and longitude in `[-180, 180]`.
/// The only way to obtain one is through [`Coordinate::try_new`] (or the
/// input validator, which calls it), so every `Coordinate` in circulation
/// satisfies both bounds.
///
/// # Examples
///
/// ```
/// use weather_archive::Coordinate;
///
/// let new_york = Coordinate::try_new(40.7128, -74.0060).unwrap();
/// assert_eq!(new_york.latitude(), 40.7128);
/// assert_eq!(new_york.longitude(), -74.006);
///
/// assert!(Coordinate::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub const LATITUDE_LIMIT: f64 = 90.0;
    pub const LONGITUDE_LIMIT: f64 = 180.0;

    /// Checks the bounds, latitude first.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::NotANumber`] if either value is NaN or infinite.
    /// * [`ValidationError::LatitudeOutOfRange`] / [`ValidationError::LongitudeOutOfRange`]
    ///   if a value falls outside its bounds.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() {
            return Err(ValidationError::NotANumber(Field::Latitude));
        }
        if !longitude.is_finite() {
            return Err(ValidationError::NotANumber(Field::Longitude));
        }
        if !(-Self::LATITUDE_LIMIT..=Self::LATITUDE_LIMIT).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-Self::LONGITUDE_LIMIT..=Self::LONGITUDE_LIMIT).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_latitude_checked_before_longitude() {
        assert_eq!(
            Coordinate::try_new(-90.5, 200.0),
            Err(ValidationError::LatitudeOutOfRange(-90.5))
        );
        assert_eq!(
            Coordinate::try_new(10.0, 180.01),
            Err(ValidationError::LongitudeOutOfRange(180.01))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            Coordinate::try_new(f64::NAN, 0.0),
            Err(ValidationError::NotANumber(Field::Latitude))
        );
        assert_eq!(
            Coordinate::try_new(0.0, f64::INFINITY),
            Err(ValidationError::NotANumber(Field::Longitude))
        );
    }

    #[test]
    fn test_display() {
        let c = Coordinate::try_new(52.52, 13.405).unwrap();
        assert_eq!(c.to_string(), "(52.52, 13.405)");
    }
}
