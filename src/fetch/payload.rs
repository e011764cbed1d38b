//! Classifies an archive response as a series or as one of the failure kinds.

use crate::fetch::error::FetchError;
use crate::fetch::transport::TransportResponse;
use crate::types::metric::DailyMetric;
use crate::types::series::{DailyRecord, DailySeries};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

const FALLBACK_UPSTREAM_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Debug, Deserialize)]
struct ArchivePayload {
    daily: DailyColumns,
}

#[derive(Debug, Deserialize)]
struct DailyColumns {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    temperature_2m_mean: Vec<Option<f64>>,
    apparent_temperature_max: Vec<Option<f64>>,
    apparent_temperature_min: Vec<Option<f64>>,
    apparent_temperature_mean: Vec<Option<f64>>,
}

impl DailyColumns {
    fn column(&self, metric: DailyMetric) -> &[Option<f64>] {
        match metric {
            DailyMetric::TemperatureMax => &self.temperature_2m_max,
            DailyMetric::TemperatureMin => &self.temperature_2m_min,
            DailyMetric::TemperatureMean => &self.temperature_2m_mean,
            DailyMetric::ApparentTemperatureMax => &self.apparent_temperature_max,
            DailyMetric::ApparentTemperatureMin => &self.apparent_temperature_min,
            DailyMetric::ApparentTemperatureMean => &self.apparent_temperature_mean,
        }
    }

    /// Zips the positional columns into per-day records.
    fn into_series(self) -> Result<DailySeries, FetchError> {
        let expected = self.time.len();
        for metric in DailyMetric::ALL {
            let found = self.column(metric).len();
            if found != expected {
                return Err(FetchError::MalformedResponse {
                    detail: format!(
                        "column '{}' has {} values but there are {} dates",
                        metric, found, expected
                    ),
                });
            }
        }

        let records = self
            .time
            .iter()
            .enumerate()
            .map(|(i, &date)| {
                let mut record = DailyRecord::empty(date);
                for metric in DailyMetric::ALL {
                    record.set_value(metric, self.column(metric)[i]);
                }
                record
            })
            .collect();

        DailySeries::try_from_records(records).map_err(|e| FetchError::MalformedResponse {
            detail: e.to_string(),
        })
    }
}

/// Turns a transport response into a series.
///
/// Checks run in this order:
///
/// 1. non-2xx status → [`FetchError::Transport`], body ignored,
/// 2. body is not JSON → [`FetchError::MalformedResponse`],
/// 3. a set `error` flag → [`FetchError::Upstream`] carrying `reason`, even on status 200,
/// 4. `daily` missing, ill-typed, or its arrays misaligned or out of order
///    → [`FetchError::MalformedResponse`].
pub fn classify_response(url: &str, response: &TransportResponse) -> Result<DailySeries, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Transport {
            url: url.to_string(),
            status_code: Some(response.status),
            message: format!("status {}", response.status),
        });
    }

    let value: Value =
        serde_json::from_str(&response.body).map_err(|e| FetchError::MalformedResponse {
            detail: format!("body is not valid JSON: {e}"),
        })?;

    if let Some(message) = upstream_failure(&value) {
        return Err(FetchError::Upstream { message });
    }

    let payload: ArchivePayload =
        serde_json::from_value(value).map_err(|e| FetchError::MalformedResponse {
            detail: e.to_string(),
        })?;
    payload.daily.into_series()
}

fn upstream_failure(value: &Value) -> Option<String> {
    if !value.get("error").is_some_and(is_flag_set) {
        return None;
    }
    let message = value
        .get("reason")
        .and_then(Value::as_str)
        .filter(|reason| !reason.is_empty())
        .unwrap_or(FALLBACK_UPSTREAM_MESSAGE);
    Some(message.to_string())
}

/// `null`, `false`, `0` and `""` leave the flag unset; any other value sets it.
fn is_flag_set(flag: &Value) -> bool {
    match flag {
        Value::Null => false,
        Value::Bool(set) => *set,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://archive.test/v1/archive?latitude=1";

    fn ok(body: Value) -> TransportResponse {
        TransportResponse::new(200, body.to_string())
    }

    fn three_days() -> Value {
        json!({
            "latitude": 40.710335,
            "longitude": -73.99307,
            "daily_units": {"time": "iso8601", "temperature_2m_max": "°C"},
            "daily": {
                "time": ["2024-01-01", "2024-01-02", "2024-01-03"],
                "temperature_2m_max": [7.1, 5.4, null],
                "temperature_2m_min": [1.2, -0.3, 0.0],
                "temperature_2m_mean": [4.0, 2.5, 1.1],
                "apparent_temperature_max": [3.9, 1.8, 2.0],
                "apparent_temperature_min": [-2.4, -4.1, -3.3],
                "apparent_temperature_mean": [0.6, -1.2, -0.4]
            }
        })
    }

    #[test]
    fn test_success_payload() {
        let series = classify_response(URL, &ok(three_days())).unwrap();
        assert_eq!(series.len(), 3);
        let first = &series.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(first.temperature_max, Some(7.1));
        assert_eq!(first.apparent_temperature_mean, Some(0.6));
        assert_eq!(series.records()[2].temperature_max, None);
        assert_eq!(series.records()[2].temperature_min, Some(0.0));
    }

    #[test]
    fn test_error_flag_with_status_200_is_upstream() {
        let response = ok(json!({"error": true, "reason": "X"}));
        assert_eq!(
            classify_response(URL, &response),
            Err(FetchError::Upstream {
                message: "X".to_string()
            })
        );
    }

    #[test]
    fn test_error_flag_without_reason_uses_fallback() {
        let response = ok(json!({"error": true}));
        assert_eq!(
            classify_response(URL, &response),
            Err(FetchError::Upstream {
                message: FALLBACK_UPSTREAM_MESSAGE.to_string()
            })
        );
    }

    #[test]
    fn test_error_false_is_not_upstream_failure() {
        for unset in [json!(false), json!(null), json!(0), json!("")] {
            let mut body = three_days();
            body["error"] = unset;
            assert!(classify_response(URL, &ok(body)).is_ok());
        }
    }

    #[test]
    fn test_non_boolean_error_flag_keeps_reason() {
        for set in [json!(1), json!("yes"), json!({"code": 400})] {
            let response = ok(json!({"error": set, "reason": "X"}));
            assert_eq!(
                classify_response(URL, &response),
                Err(FetchError::Upstream {
                    message: "X".to_string()
                })
            );
        }
    }

    #[test]
    fn test_non_2xx_is_transport_even_with_error_body() {
        let response = TransportResponse::new(
            400,
            json!({"error": true, "reason": "Parameter 'start_date' is invalid"}).to_string(),
        );
        let err = classify_response(URL, &response).unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.to_string(), "API request failed with status 400");
    }

    #[test]
    fn test_not_json_is_malformed() {
        let response = TransportResponse::new(200, "<html>gateway</html>");
        assert!(matches!(
            classify_response(URL, &response),
            Err(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_missing_daily_block_is_malformed() {
        let response = ok(json!({"latitude": 1.0}));
        assert!(matches!(
            classify_response(URL, &response),
            Err(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_missing_metric_column_is_malformed() {
        let mut body = three_days();
        body["daily"]
            .as_object_mut()
            .unwrap()
            .remove("apparent_temperature_min");
        assert!(matches!(
            classify_response(URL, &ok(body)),
            Err(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_misaligned_columns_are_malformed() {
        let mut body = three_days();
        body["daily"]["temperature_2m_mean"] = json!([4.0, 2.5]);
        let err = classify_response(URL, &ok(body)).unwrap_err();
        assert_eq!(
            err,
            FetchError::MalformedResponse {
                detail: "column 'temperature_2m_mean' has 2 values but there are 3 dates"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let mut body = three_days();
        body["daily"]["time"] = json!(["2024-01-01", "01/02/2024", "2024-01-03"]);
        assert!(matches!(
            classify_response(URL, &ok(body)),
            Err(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_unordered_dates_are_malformed() {
        let mut body = three_days();
        body["daily"]["time"] = json!(["2024-01-01", "2024-01-03", "2024-01-02"]);
        assert!(matches!(
            classify_response(URL, &ok(body)),
            Err(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_empty_daily_block_is_empty_series() {
        let body = json!({"daily": {
            "time": [],
            "temperature_2m_max": [],
            "temperature_2m_min": [],
            "temperature_2m_mean": [],
            "apparent_temperature_max": [],
            "apparent_temperature_min": [],
            "apparent_temperature_mean": []
        }});
        assert!(classify_response(URL, &ok(body)).unwrap().is_empty());
    }
}
