//! The fixed set of daily metrics requested from the archive.

use std::fmt;

/// A daily aggregate requested from the archive service.
///
/// The set is fixed and ordered: max/min/mean air temperature followed by
/// max/min/mean apparent ("feels like") temperature. All values are in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DailyMetric {
    TemperatureMax,
    TemperatureMin,
    TemperatureMean,
    ApparentTemperatureMax,
    ApparentTemperatureMin,
    ApparentTemperatureMean,
}

impl DailyMetric {
    /// Every metric, in request and column order.
    pub const ALL: [DailyMetric; 6] = [
        DailyMetric::TemperatureMax,
        DailyMetric::TemperatureMin,
        DailyMetric::TemperatureMean,
        DailyMetric::ApparentTemperatureMax,
        DailyMetric::ApparentTemperatureMin,
        DailyMetric::ApparentTemperatureMean,
    ];

    /// Parameter name used by the archive API, both in the `daily=` query
    /// parameter and as the key of the response array.
    pub fn api_name(&self) -> &'static str {
        match self {
            DailyMetric::TemperatureMax => "temperature_2m_max",
            DailyMetric::TemperatureMin => "temperature_2m_min",
            DailyMetric::TemperatureMean => "temperature_2m_mean",
            DailyMetric::ApparentTemperatureMax => "apparent_temperature_max",
            DailyMetric::ApparentTemperatureMin => "apparent_temperature_min",
            DailyMetric::ApparentTemperatureMean => "apparent_temperature_mean",
        }
    }

    /// Short series name for chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            DailyMetric::TemperatureMax => "Max Temp",
            DailyMetric::TemperatureMin => "Min Temp",
            DailyMetric::TemperatureMean => "Mean Temp",
            DailyMetric::ApparentTemperatureMax => "Max Apparent",
            DailyMetric::ApparentTemperatureMin => "Min Apparent",
            DailyMetric::ApparentTemperatureMean => "Mean Apparent",
        }
    }

    /// Descriptive label including the unit, for tooltips and axis titles.
    pub fn long_label(&self) -> &'static str {
        match self {
            DailyMetric::TemperatureMax => "Maximum Temperature (°C)",
            DailyMetric::TemperatureMin => "Minimum Temperature (°C)",
            DailyMetric::TemperatureMean => "Mean Temperature (°C)",
            DailyMetric::ApparentTemperatureMax => "Maximum Apparent Temperature (°C)",
            DailyMetric::ApparentTemperatureMin => "Minimum Apparent Temperature (°C)",
            DailyMetric::ApparentTemperatureMean => "Mean Apparent Temperature (°C)",
        }
    }

    /// Table column header.
    pub fn column_header(&self) -> &'static str {
        match self {
            DailyMetric::TemperatureMax => "Max Temp (°C)",
            DailyMetric::TemperatureMin => "Min Temp (°C)",
            DailyMetric::TemperatureMean => "Mean Temp (°C)",
            DailyMetric::ApparentTemperatureMax => "Max Apparent (°C)",
            DailyMetric::ApparentTemperatureMin => "Min Apparent (°C)",
            DailyMetric::ApparentTemperatureMean => "Mean Apparent (°C)",
        }
    }
}

/// Formats a metric using its [`DailyMetric::api_name`].
///
/// # Examples
///
/// ```
/// use weather_archive::DailyMetric;
///
/// assert_eq!(DailyMetric::TemperatureMax.to_string(), "temperature_2m_max");
/// ```
impl fmt::Display for DailyMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
