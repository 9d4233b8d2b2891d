//! [Palmetto Energy Intelligence](https://ei.palmetto.com/) building energy model client.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{api::client, prelude::*, quantity::energy::KilowattHours};

const ENDPOINT: &str = "https://ei.palmetto.com/api/v0/bem/calculate";

/// Calendar year the model is calibrated and queried over.
const FROM_DATETIME: &str = "2023-01-01T00:00:00";
const TO_DATETIME: &str = "2024-01-01T00:00:00";

/// The model rejects plug loads below this intensity.
pub const MIN_PLUG_LOADS: f64 = 0.78;

pub const SQUARE_METRES_PER_SQUARE_FOOT: f64 = 0.092_903;

pub struct Api {
    client: Client,
    api_key: String,
}

impl Api {
    pub fn try_new(api_key: String) -> Result<Self> {
        Ok(Self { client: client::try_new()?, api_key })
    }

    #[instrument(skip_all, name = "estimating the building consumption…")]
    pub async fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse> {
        self.client
            .post(ENDPOINT)
            .header("X-API-Key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("failed to call the building energy API")?
            .error_for_status()
            .context("the building energy request failed")?
            .json()
            .await
            .context("failed to deserialize the building energy response")
    }
}

#[derive(Serialize)]
pub struct CalculateRequest {
    consumption: Consumption,
    costs: Costs,
    utility_rates: UtilityRates,
    location: Location,
    parameters: Parameters,
    production: Production,
    storage: Storage,
}

impl CalculateRequest {
    /// Assemble the calculation request: the baseline consumption attributes vary
    /// per building, everything else is fixed calibration.
    #[must_use]
    pub fn new(location: Location, baseline: Vec<Attribute>) -> Self {
        Self {
            consumption: Consumption {
                actuals: vec![Actual {
                    from_datetime: FROM_DATETIME,
                    to_datetime: TO_DATETIME,
                    value: 3774.0,
                    variable: "consumption.electricity",
                }],
                attributes: Attributes { baseline, hypothetical: vec![] },
                calibration: ConsumptionCalibration {
                    apply_residuals: true,
                    method: "uniform-mean",
                    sample_size: 1,
                },
            },
            costs: Costs {
                emission_rates: EmissionRates {
                    electricity: Rate { units: "kgCO2/kWh", value: 0.47045 },
                    fossil_fuel: Rate { units: "kgCO2/kWh", value: 0.187_205_731_832_139_2 },
                },
            },
            utility_rates: UtilityRates {
                electricity: Rate { units: "$/kWh", value: 0.29305 },
                fossil_fuel: Rate { units: "$/kWh", value: 0.069_771 },
                pv_buyback: Rate { units: "$/kWh", value: 0.2 },
                pv_ppa: Rate { units: "$/kWh", value: 0.26 },
            },
            location,
            parameters: Parameters {
                from_datetime: FROM_DATETIME,
                to_datetime: TO_DATETIME,
                clip_by: "inner",
                group_by: "month",
                interval_format: "long",
                variables: ["consumption.electricity"],
            },
            production: Production {
                actuals: vec![Actual {
                    from_datetime: FROM_DATETIME,
                    to_datetime: TO_DATETIME,
                    value: 7.3,
                    variable: "production.electricity",
                }],
                attributes: Attributes {
                    baseline: vec![Attribute::number("capacity", 10.0)],
                    hypothetical: vec![],
                },
                calibration: ProductionCalibration { method: "uniform-mean" },
            },
            storage: Storage {
                attributes: Attributes {
                    baseline: vec![
                        Attribute::number("capacity", 10.0),
                        Attribute::number("power", 5.0),
                        Attribute::number("capacity_recommendation_quantile", 0.5),
                    ],
                    hypothetical: vec![],
                },
            },
        }
    }
}

#[derive(Serialize)]
struct Consumption {
    actuals: Vec<Actual>,
    attributes: Attributes,
    calibration: ConsumptionCalibration,
}

#[derive(Serialize)]
struct Actual {
    from_datetime: &'static str,
    to_datetime: &'static str,
    value: f64,
    variable: &'static str,
}

#[derive(Serialize)]
struct Attributes {
    baseline: Vec<Attribute>,
    hypothetical: Vec<Attribute>,
}

#[derive(Serialize)]
pub struct Attribute {
    name: &'static str,
    value: AttributeValue,
}

impl Attribute {
    #[must_use]
    pub const fn flag(name: &'static str, value: bool) -> Self {
        Self { name, value: AttributeValue::Flag(value) }
    }

    #[must_use]
    pub const fn integer(name: &'static str, value: u32) -> Self {
        Self { name, value: AttributeValue::Integer(value) }
    }

    #[must_use]
    pub const fn number(name: &'static str, value: f64) -> Self {
        Self { name, value: AttributeValue::Number(value) }
    }

    #[must_use]
    pub const fn text(name: &'static str, value: &'static str) -> Self {
        Self { name, value: AttributeValue::Text(value) }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum AttributeValue {
    Flag(bool),
    Integer(u32),
    Number(f64),
    Text(&'static str),
}

#[derive(Serialize)]
struct ConsumptionCalibration {
    apply_residuals: bool,
    method: &'static str,
    sample_size: u32,
}

#[derive(Serialize)]
struct ProductionCalibration {
    method: &'static str,
}

#[derive(Serialize)]
struct Costs {
    emission_rates: EmissionRates,
}

#[derive(Serialize)]
struct EmissionRates {
    electricity: Rate,
    fossil_fuel: Rate,
}

#[derive(Serialize)]
struct UtilityRates {
    electricity: Rate,
    fossil_fuel: Rate,
    pv_buyback: Rate,
    pv_ppa: Rate,
}

#[derive(Serialize)]
struct Rate {
    units: &'static str,
    value: f64,
}

#[derive(Copy, Clone, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize)]
struct Parameters {
    from_datetime: &'static str,
    to_datetime: &'static str,
    clip_by: &'static str,
    group_by: &'static str,
    interval_format: &'static str,
    variables: [&'static str; 1],
}

#[derive(Serialize)]
struct Production {
    actuals: Vec<Actual>,
    attributes: Attributes,
    calibration: ProductionCalibration,
}

#[derive(Serialize)]
struct Storage {
    attributes: Attributes,
}

#[derive(Deserialize)]
pub struct CalculateResponse {
    data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    intervals: Vec<Interval>,
}

#[derive(Deserialize)]
struct Interval {
    value: f64,
}

impl CalculateResponse {
    /// Total over the returned monthly intervals.
    #[must_use]
    pub fn annual_consumption(&self) -> KilowattHours {
        KilowattHours(self.data.intervals.iter().map(|interval| interval.value).sum())
    }
}

/// Building type vocabulary of the baseline model.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum BuildingType {
    SingleFamilyDetached,
    SingleFamilyAttached,
    #[value(name = "multi-family-2")]
    MultiFamily2Units,
    #[value(name = "multi-family-3-4")]
    MultiFamily3To4Units,
    #[value(name = "multi-family-5-9")]
    MultiFamily5To9Units,
    #[value(name = "multi-family-10-19")]
    MultiFamily10To19Units,
    #[value(name = "multi-family-20-49")]
    MultiFamily20To49Units,
    #[value(name = "multi-family-50-plus")]
    MultiFamily50PlusUnits,
    MobileHome,
}

impl BuildingType {
    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::SingleFamilyDetached => "Single-Family Detached",
            Self::SingleFamilyAttached => "Single-Family Attached",
            Self::MultiFamily2Units => "Multi-Family (2 units)",
            Self::MultiFamily3To4Units => "Multi-Family (3 or 4 units)",
            Self::MultiFamily5To9Units => "Multi-Family (5 to 9 units)",
            Self::MultiFamily10To19Units => "Multi-Family (10 to 19 units)",
            Self::MultiFamily20To49Units => "Multi-Family (20 to 49 units)",
            Self::MultiFamily50PlusUnits => "Multi-Family (50 or more units)",
            Self::MobileHome => "Mobile Home",
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Lighting {
    Incandescent,
    Cfl,
    Led,
}

impl Lighting {
    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::Incandescent => "Incandescent",
            Self::Cfl => "CFL",
            Self::Led => "LED",
        }
    }
}

/// Plug load intensity brackets.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum PlugLoad {
    Minimal,
    Standard,
    High,
    Maximum,
}

impl PlugLoad {
    #[must_use]
    pub const fn intensity(self) -> f64 {
        match self {
            Self::Minimal => 0.78,
            Self::Standard => 1.0,
            Self::High => 1.5,
            Self::Maximum => 1.66,
        }
    }
}

/// Dishwasher efficiency brackets, as annual kWh figures the model expects.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum DishwasherEfficiency {
    Inefficient,
    Standard,
    EnergyStar,
    EnergyStarCompact,
}

impl DishwasherEfficiency {
    #[must_use]
    pub const fn annual_consumption(self) -> u32 {
        match self {
            Self::Inefficient => 318,
            Self::Standard => 290,
            Self::EnergyStar => 240,
            Self::EnergyStarCompact => 155,
        }
    }
}

/// Shared bracket for clothes dryers and washers.
#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum ApplianceEfficiency {
    None,
    Standard,
    EnergyStar,
}

impl ApplianceEfficiency {
    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Standard => "Standard",
            Self::EnergyStar => "EnergyStar",
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_serialize_request() -> Result {
        let request = CalculateRequest::new(
            Location { latitude: 33.697_327_2, longitude: -117.195_664_8 },
            vec![
                Attribute::text("building_type", BuildingType::SingleFamilyDetached.as_attribute()),
                Attribute::integer("num_stories", 2),
                Attribute::flag("hvac_cooling", true),
            ],
        );
        let body = serde_json::to_value(&request)?;
        assert_eq!(body["parameters"]["group_by"], "month");
        assert_eq!(body["consumption"]["calibration"]["apply_residuals"], true);
        assert_eq!(
            body["consumption"]["attributes"]["baseline"][0]["value"],
            "Single-Family Detached",
        );
        assert_eq!(body["consumption"]["attributes"]["baseline"][1]["value"], 2);
        assert_eq!(body["storage"]["attributes"]["baseline"][1]["name"], "power");
        Ok(())
    }

    #[test]
    fn test_annual_consumption_sums_intervals() -> Result {
        let response: CalculateResponse = serde_json::from_str(
            r#"{
                "data": {
                    "intervals": [
                        {"from_datetime": "2023-01-01T00:00:00", "value": 310.2, "variable": "consumption.electricity"},
                        {"from_datetime": "2023-02-01T00:00:00", "value": 289.8, "variable": "consumption.electricity"}
                    ]
                }
            }"#,
        )?;
        assert_abs_diff_eq!(response.annual_consumption().0, 600.0);
        Ok(())
    }
}
