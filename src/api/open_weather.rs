//! [OpenWeather One Call](https://openweathermap.org/api/one-call-3) client.

use chrono::{DateTime, Local};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{api::client, prelude::*};

pub struct Api {
    client: Client,
    url: String,
}

impl Api {
    pub fn try_new(api_key: &str, latitude: f64, longitude: f64) -> Result<Self> {
        let url = format!(
            "https://api.openweathermap.org/data/3.0/onecall?lat={latitude}&lon={longitude}&exclude=current,minutely&appid={api_key}"
        );
        Ok(Self { client: client::try_new()?, url })
    }

    #[instrument(skip_all, name = "fetching the weather…")]
    pub async fn get(&self) -> Result<WeatherReport> {
        self.client
            .get(&self.url)
            .send()
            .await
            .context("failed to call the weather API")?
            .error_for_status()
            .context("the weather request failed")?
            .json::<WeatherReport>()
            .await
            .context("failed to deserialize the weather report")
    }
}

/// The consumed subset of the One Call response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WeatherReport {
    pub hourly: Vec<HourlyForecast>,

    #[serde(default)]
    pub alerts: Vec<Alert>,
}

#[serde_as]
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct HourlyForecast {
    #[serde_as(as = "serde_with::TimestampSeconds<i64>")]
    #[serde(rename = "dt")]
    pub time: DateTime<Local>,

    /// Missing when the provider has no UV data for the hour.
    #[serde(rename = "uvi", default)]
    pub uv_index: f64,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Alert {
    pub event: String,
    pub sender_name: String,
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde_as(as = "serde_with::TimestampSeconds<i64>")]
    pub start: DateTime<Local>,

    #[serde_as(as = "serde_with::TimestampSeconds<i64>")]
    pub end: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report() -> Result {
        let report: WeatherReport = serde_json::from_str(
            r#"{
                "lat": 37.7749,
                "lon": -122.4194,
                "hourly": [
                    {"dt": 1735725600, "temp": 283.4, "uvi": 1.62},
                    {"dt": 1735729200, "temp": 282.9}
                ],
                "alerts": [
                    {
                        "sender_name": "NWS San Francisco Bay Area",
                        "event": "Flood Watch",
                        "start": 1735725600,
                        "end": 1735772400,
                        "description": "Heavy rainfall expected.",
                        "tags": ["Flood"]
                    }
                ]
            }"#,
        )?;
        assert_eq!(report.hourly.len(), 2);
        assert_eq!(report.hourly[0].time.timestamp(), 1_735_725_600);
        assert!((report.hourly[0].uv_index - 1.62).abs() < f64::EPSILON);
        assert!((report.hourly[1].uv_index).abs() < f64::EPSILON);
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].tags, vec!["Flood".to_string()]);
        Ok(())
    }

    #[test]
    fn test_deserialize_report_without_alerts() -> Result {
        let report: WeatherReport = serde_json::from_str(r#"{"hourly": []}"#)?;
        assert!(report.alerts.is_empty());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn test_get_ok() -> Result {
        let api_key = std::env::var("OPEN_WEATHER_API_KEY")?;
        let report = Api::try_new(&api_key, 37.7749, -122.4194)?.get().await?;
        assert!(!report.hourly.is_empty());
        Ok(())
    }
}
