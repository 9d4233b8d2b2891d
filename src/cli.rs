mod community;
mod donate;
mod monitor;
mod relief_center;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Url;

pub use self::{
    community::community,
    donate::donate,
    monitor::monitor,
    relief_center::relief_center,
};
use crate::{
    api::{
        heartbeat,
        palmetto::{
            ApplianceEfficiency,
            Attribute,
            BuildingType,
            DishwasherEfficiency,
            Lighting,
            MIN_PLUG_LOADS,
            PlugLoad,
            SQUARE_METRES_PER_SQUARE_FOOT,
        },
    },
    prelude::*,
    quantity::{
        energy::KilowattHours,
        percent::Percent,
        rate::{DollarsPerKilowatt, DollarsPerKilowattHour},
    },
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the weather, simulate the battery, and render the decision timeline.
    Monitor(Box<MonitorArgs>),

    /// Estimate the cost of making a community of houses disaster-ready.
    Community(CommunityArgs),

    /// Estimate the impact of donating excess energy back to the community.
    Donate(DonateArgs),

    /// Size the battery backup for a disaster relief center.
    #[clap(name = "relief-center")]
    ReliefCenter(Box<ReliefCenterArgs>),
}

#[derive(Parser)]
pub struct MonitorArgs {
    /// OpenWeather API key.
    #[clap(long = "api-key", env = "OPEN_WEATHER_API_KEY")]
    pub api_key: String,

    #[clap(flatten)]
    pub location: LocationArgs,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    /// Where the fetched weather report is memoized.
    #[clap(long = "weather-cache", env = "WEATHER_CACHE_PATH", default_value = "weather-cache.json")]
    pub weather_cache: PathBuf,

    #[clap(flatten)]
    pub heartbeat: HeartbeatArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct LocationArgs {
    /// Site latitude.
    #[clap(long, default_value = "37.7749", env = "LATITUDE")]
    pub latitude: f64,

    /// Site longitude.
    #[clap(long, default_value = "-122.4194", env = "LONGITUDE")]
    pub longitude: f64,
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Total battery capacity in kilowatt-hours.
    #[clap(long = "battery-capacity", default_value = "300", env = "BATTERY_CAPACITY")]
    pub capacity: KilowattHours,

    /// Battery level at the start of the run, in kilowatt-hours.
    #[clap(long = "initial-level", default_value = "150", env = "INITIAL_BATTERY_LEVEL")]
    pub initial_level: KilowattHours,

    /// Battery level at or below which storing is preferred over exporting.
    ///
    /// TODO: clarify whether this is a percentage or an absolute level in kilowatt-hours.
    #[clap(long = "battery-threshold", default_value = "50", env = "BATTERY_THRESHOLD")]
    pub threshold: KilowattHours,
}

#[derive(Clone, Parser)]
pub struct HeartbeatArgs {
    /// Success heartbeat URL, pinged after a successful run.
    #[clap(long = "heartbeat-url", env = "HEARTBEAT_URL")]
    pub url: Option<Url>,
}

impl HeartbeatArgs {
    /// Failing to deliver the heartbeat must not fail the run itself.
    pub async fn send(&self) {
        if let Some(url) = &self.url
            && let Err(error) = heartbeat::send(url.clone()).await
        {
            warn!("failed to send the heartbeat: {error:#}");
        }
    }
}

#[derive(Parser)]
pub struct CommunityArgs {
    /// Number of houses in the community.
    #[clap(long, default_value = "100")]
    pub houses: u32,

    /// Average daily energy consumption per house, in kilowatt-hours.
    #[clap(long = "daily-consumption", default_value = "30")]
    pub daily_consumption: KilowattHours,

    /// Daily solar energy production per house, in kilowatt-hours.
    #[clap(long = "daily-solar-production", default_value = "35")]
    pub daily_solar_production: KilowattHours,

    /// Battery cost per kilowatt-hour, in dollars.
    #[clap(long = "battery-cost", default_value = "200")]
    pub battery_cost: DollarsPerKilowattHour,

    /// Solar installation cost per kilowatt, in dollars.
    #[clap(long = "solar-cost", default_value = "2500")]
    pub solar_cost: DollarsPerKilowatt,

    /// Expected blackout duration in hours.
    #[clap(long = "blackout-duration-hours", default_value = "48")]
    pub blackout_duration_hours: u32,

    /// Critical load percentage during the blackout.
    #[clap(long = "critical-load-percent", default_value = "50")]
    pub critical_load: Percent,
}

#[derive(Parser)]
pub struct DonateArgs {
    /// Community name, used for display only.
    #[clap(long = "community-name", default_value = "Menifee, CA")]
    pub community_name: String,

    /// Estimated monthly excess energy in kilowatt-hours.
    #[clap(long = "excess-energy", default_value = "5000")]
    pub excess_energy: KilowattHours,

    /// Percentage of the excess energy to donate.
    #[clap(long = "donation-percent", default_value = "25")]
    pub donation: Percent,
}

#[derive(Parser)]
pub struct ReliefCenterArgs {
    /// Palmetto API key.
    #[clap(long = "api-key", env = "PALMETTO_API_KEY")]
    pub api_key: String,

    /// Site latitude.
    #[clap(long, default_value = "33.6973272", env = "LATITUDE")]
    pub latitude: f64,

    /// Site longitude.
    #[clap(long, default_value = "-117.1956648", env = "LONGITUDE")]
    pub longitude: f64,

    #[clap(flatten)]
    pub building: BuildingArgs,

    /// Number of backup days the battery must cover.
    #[clap(long = "backup-days", default_value = "1")]
    pub backup_days: u32,
}

#[derive(Parser)]
pub struct BuildingArgs {
    /// Building type.
    #[clap(long = "building-type", value_enum, default_value = "single-family-detached")]
    pub building_type: BuildingType,

    /// Number of stories.
    #[clap(long, default_value = "1")]
    pub stories: u32,

    /// Total floor area in square feet.
    #[clap(long = "floor-area-sq-feet", default_value = "1000")]
    pub floor_area_sq_feet: f64,

    /// Enable HVAC cooling.
    #[clap(long = "hvac-cooling")]
    pub hvac_cooling: bool,

    /// Lighting type.
    #[clap(long, value_enum, default_value = "incandescent")]
    pub lighting: Lighting,

    /// Plug load bracket.
    #[clap(long = "plug-load", value_enum, default_value = "minimal")]
    pub plug_load: PlugLoad,

    /// Dishwasher efficiency bracket.
    #[clap(long, value_enum)]
    pub dishwasher: Option<DishwasherEfficiency>,

    /// Refrigerator consumption in kWh per year.
    #[clap(long = "refrigerator-efficiency", value_parser = clap::value_parser!(u32).range(..=1360))]
    pub refrigerator_efficiency: Option<u32>,

    /// Extra freezer consumption in kWh per year.
    #[clap(long = "freezer-efficiency", value_parser = clap::value_parser!(u32).range(..=1000))]
    pub freezer_efficiency: Option<u32>,

    /// Clothes dryer efficiency bracket.
    #[clap(long = "clothes-dryer", value_enum)]
    pub clothes_dryer: Option<ApplianceEfficiency>,

    /// Clothes washer efficiency bracket.
    #[clap(long = "clothes-washer", value_enum)]
    pub clothes_washer: Option<ApplianceEfficiency>,
}

impl BuildingArgs {
    /// Baseline attributes of the building energy model.
    #[must_use]
    pub fn baseline_attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![
            Attribute::text("building_type", self.building_type.as_attribute()),
            Attribute::integer("num_stories", self.stories),
            Attribute::number("floor_area", self.floor_area_sq_feet * SQUARE_METRES_PER_SQUARE_FOOT),
            Attribute::flag("hvac_cooling", self.hvac_cooling),
            Attribute::text("lighting", self.lighting.as_attribute()),
            Attribute::number("plug_loads", self.plug_load.intensity().max(MIN_PLUG_LOADS)),
        ];
        if let Some(dishwasher) = self.dishwasher {
            attributes
                .push(Attribute::integer("dishwasher_efficiency", dishwasher.annual_consumption()));
        }
        if let Some(consumption) = self.refrigerator_efficiency {
            attributes.push(Attribute::integer("refrigerator_efficiency", consumption));
        }
        if let Some(consumption) = self.freezer_efficiency {
            attributes.push(Attribute::integer("freezer_extra_efficiency", consumption));
        }
        if let Some(dryer) = self.clothes_dryer {
            attributes.push(Attribute::text("clothes_dryer_efficiency", dryer.as_attribute()));
        }
        if let Some(washer) = self.clothes_washer {
            attributes.push(Attribute::text("clothes_washer_efficiency", washer.as_attribute()));
        }
        attributes
    }
}
