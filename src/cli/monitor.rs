use chrono::Local;

use crate::{
    api::open_weather,
    cache::WeatherCache,
    cli::MonitorArgs,
    core::{
        alert,
        battery::{BatteryState, Simulator},
        forecast,
    },
    prelude::*,
    tables::{build_alerts_table, build_battery_table, build_decisions_table},
};

#[instrument(skip_all)]
pub async fn monitor(args: &MonitorArgs) -> Result {
    let report = match WeatherCache::read_from(&args.weather_cache, Local::now()) {
        Some(report) => report,
        None => {
            let api = open_weather::Api::try_new(
                &args.api_key,
                args.location.latitude,
                args.location.longitude,
            )?;
            let report = api.get().await?;
            WeatherCache::new(report.clone()).write_to(&args.weather_cache);
            report
        }
    };
    info!(
        n_hours = report.hourly.len(),
        n_alerts = report.alerts.len(),
        "got the weather report",
    );

    for alert in &report.alerts {
        if alert::severe_tags(alert).is_empty() {
            info!(event = %alert.event, "weather alert");
        } else {
            warn!(event = %alert.event, sender = %alert.sender_name, "severe weather warning");
        }
    }
    if report.alerts.is_empty() {
        info!("no weather alerts");
    } else {
        println!("{}", build_alerts_table(&report.alerts));
    }

    let conserve = alert::classify(&report.alerts);
    let generation_forecast = forecast::predict_generation(&report.hourly);

    let mut state = BatteryState::new(args.battery.initial_level, args.battery.capacity);
    let decisions = Simulator::builder()
        .forecast(&generation_forecast)
        .state(&mut state)
        .conserve(conserve)
        .threshold(args.battery.threshold)
        .simulate()?;

    println!("{}", build_decisions_table(&decisions, args.battery.threshold));
    println!("{}", build_battery_table(&state));
    if conserve {
        warn!("grid export is paused while severe weather alerts are active");
    }

    args.heartbeat.send().await;
    Ok(())
}
