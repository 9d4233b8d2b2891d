use std::fmt::{Display, Formatter};

use bon::Builder;
use chrono::{DateTime, Local};

use crate::{core::point::Point, prelude::*, quantity::energy::KilowattHours};

/// Fraction of the generated energy actually retained when storing.
const ROUND_TRIP_EFFICIENCY: f64 = 0.8;

/// Flat amount exported per push-to-grid step, regardless of the generation.
const GRID_EXPORT_STEP: KilowattHours = KilowattHours(10.0);

/// Battery charge state, threaded mutably through a simulation run.
#[derive(Copy, Clone, Debug)]
pub struct BatteryState {
    pub level: KilowattHours,
    pub capacity: KilowattHours,
}

impl BatteryState {
    #[must_use]
    pub const fn new(level: KilowattHours, capacity: KilowattHours) -> Self {
        Self { level, capacity }
    }

    #[must_use]
    pub fn percent_full(&self) -> f64 {
        self.level / self.capacity * 100.0
    }

    fn available_capacity(&self) -> KilowattHours {
        self.capacity - self.level
    }
}

/// Hourly routing decision for the forecasted generation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    StoreEnergy,
    PushToGrid,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreEnergy => write!(f, "Store Energy"),
            Self::PushToGrid => write!(f, "Push to Grid"),
        }
    }
}

/// One simulated step: the action taken and the battery level it left behind.
#[derive(Copy, Clone, Debug)]
pub struct Decision {
    pub time: DateTime<Local>,
    pub action: Action,
    pub level_after: KilowattHours,
}

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Simulator<'a> {
    /// Hourly generation forecast, ascending by time (the caller sorts).
    forecast: &'a [Point<KilowattHours>],

    state: &'a mut BatteryState,

    /// Force storing regardless of the generation and threshold.
    conserve: bool,

    /// Level at or below which storing is preferred over exporting.
    threshold: KilowattHours,
}

impl<S: simulator_builder::IsComplete> SimulatorBuilder<'_, S> {
    pub fn simulate(self) -> Result<Vec<Decision>> {
        self.build().simulate()
    }
}

impl Simulator<'_> {
    /// Walk the forecast in order, storing or exporting each hour's generation.
    ///
    /// The state is validated before the first mutation and left untouched on failure.
    #[instrument(
        skip_all,
        name = "simulating…",
        fields(n_hours = self.forecast.len(), conserve = self.conserve),
    )]
    fn simulate(self) -> Result<Vec<Decision>> {
        ensure!(!self.forecast.is_empty(), "the generation forecast is empty");
        ensure!(
            self.state.capacity > KilowattHours::ZERO,
            "the battery capacity must be positive, got {}",
            self.state.capacity,
        );
        if let Some(point) = self.forecast.iter().find(|point| point.value < KilowattHours::ZERO) {
            bail!("negative generation {} forecasted at {}", point.value, point.time);
        }

        let mut decisions = Vec::with_capacity(self.forecast.len());
        for point in self.forecast {
            let generation = point.value;
            let action = if self.conserve
                || (generation <= self.state.available_capacity()
                    && self.state.level <= self.threshold)
            {
                self.state.level += generation * ROUND_TRIP_EFFICIENCY;
                Action::StoreEnergy
            } else {
                self.state.level -= GRID_EXPORT_STEP;
                Action::PushToGrid
            };
            self.state.level = self.state.level.clamp(KilowattHours::ZERO, self.state.capacity);
            decisions.push(Decision {
                time: point.time,
                action,
                level_after: self.state.level,
            });
        }
        Ok(decisions)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    use super::*;

    fn forecast(generation: &[f64]) -> Vec<Point<KilowattHours>> {
        generation
            .iter()
            .enumerate()
            .map(|(hour, value)| {
                #[expect(clippy::cast_possible_truncation)]
                let time =
                    Local.with_ymd_and_hms(2025, 1, 15, hour as u32, 0, 0).single().unwrap();
                Point::new(time, KilowattHours(*value))
            })
            .collect()
    }

    #[test]
    fn test_push_to_grid_above_threshold() -> Result {
        let forecast = forecast(&[100.0]);
        let mut state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert_eq!(decisions[0].action, Action::PushToGrid);
        assert_abs_diff_eq!(decisions[0].level_after.0, 140.0);
        assert_abs_diff_eq!(state.level.0, 140.0);
        Ok(())
    }

    #[test]
    fn test_store_below_threshold() -> Result {
        let forecast = forecast(&[100.0]);
        let mut state = BatteryState::new(KilowattHours(40.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert_eq!(decisions[0].action, Action::StoreEnergy);
        assert_abs_diff_eq!(decisions[0].level_after.0, 120.0);
        Ok(())
    }

    #[test]
    fn test_conserve_forces_storing() -> Result {
        let forecast = forecast(&[100.0, 100.0, 100.0]);
        let mut state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(true)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert!(decisions.iter().all(|decision| decision.action == Action::StoreEnergy));
        Ok(())
    }

    #[test]
    fn test_storing_caps_at_capacity() -> Result {
        let forecast = forecast(&[100.0]);
        let mut state = BatteryState::new(KilowattHours(290.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(true)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert_abs_diff_eq!(decisions[0].level_after.0, 300.0);
        Ok(())
    }

    /// The export step is flat, so a nearly drained battery pins at exactly zero
    /// while exports keep being recorded.
    #[test]
    fn test_exporting_pins_at_zero() -> Result {
        let forecast = forecast(&[1000.0, 1000.0, 1000.0]);
        let mut state = BatteryState::new(KilowattHours(5.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert!(decisions.iter().all(|decision| decision.action == Action::PushToGrid));
        assert!(decisions.iter().all(|decision| decision.level_after == KilowattHours::ZERO));
        Ok(())
    }

    #[test]
    fn test_level_stays_within_bounds() -> Result {
        let forecast = forecast(&[0.0, 500.0, 120.0, 0.0, 42.0, 1000.0, 3.0, 250.0]);
        let mut state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        let decisions = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate()?;
        assert_eq!(decisions.len(), forecast.len());
        for decision in &decisions {
            assert!(decision.level_after >= KilowattHours::ZERO, "{decision:?}");
            assert!(decision.level_after <= KilowattHours(300.0), "{decision:?}");
        }
        assert_eq!(state.level, decisions.last().unwrap().level_after);
        Ok(())
    }

    #[test]
    fn test_empty_forecast_fails() {
        let mut state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        let result = Simulator::builder()
            .forecast(&[])
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate();
        assert!(result.is_err());
        assert_abs_diff_eq!(state.level.0, 150.0);
    }

    #[test]
    fn test_non_positive_capacity_fails() {
        let forecast = forecast(&[100.0]);
        let mut state = BatteryState::new(KilowattHours::ZERO, KilowattHours::ZERO);
        let result = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate();
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_generation_fails() {
        let forecast = forecast(&[10.0, -1.0]);
        let mut state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        let result = Simulator::builder()
            .forecast(&forecast)
            .state(&mut state)
            .conserve(false)
            .threshold(KilowattHours(50.0))
            .simulate();
        assert!(result.is_err());
        assert_abs_diff_eq!(state.level.0, 150.0);
    }

    #[test]
    fn test_percent_full() {
        let state = BatteryState::new(KilowattHours(150.0), KilowattHours(300.0));
        assert_abs_diff_eq!(state.percent_full(), 50.0);
    }
}
