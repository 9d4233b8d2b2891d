use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{api::open_weather::WeatherReport, prelude::*};

/// How long a fetched weather report stays fresh.
const TIME_TO_LIVE_SECONDS: i64 = 3600;

/// Fixed-duration on-disk memo of the last fetched weather report.
///
/// A missing or unreadable cache is never fatal: it only forces a re-fetch.
#[derive(Deserialize, Serialize)]
pub struct WeatherCache {
    fetched_at: DateTime<Local>,
    report: WeatherReport,
}

impl WeatherCache {
    #[must_use]
    pub fn new(report: WeatherReport) -> Self {
        Self { fetched_at: Local::now(), report }
    }

    /// Read back a still-fresh report, if any.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path, now: DateTime<Local>) -> Option<WeatherReport> {
        match Self::read_fallibly_from(path) {
            Ok(Some(cache))
                if (now - cache.fetched_at).num_seconds() < TIME_TO_LIVE_SECONDS =>
            {
                info!("using the cached weather report");
                Some(cache.report)
            }
            Ok(_) => None,
            Err(error) => {
                error!("failed to read the weather cache: {error:#}");
                None
            }
        }
    }

    fn read_fallibly_from(path: &Path) -> Result<Option<Self>> {
        if path.is_file() {
            Ok(Some(serde_json::from_slice(&std::fs::read(path)?)?))
        } else {
            Ok(None)
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) {
        let result = serde_json::to_vec(self)
            .map_err(Error::from)
            .and_then(|buffer| std::fs::write(path, buffer).map_err(Error::from));
        if let Err(error) = result {
            error!("failed to write the weather cache: {error:#}");
        }
    }
}
