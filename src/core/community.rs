use crate::quantity::{
    cost::Cost,
    energy::KilowattHours,
    percent::Percent,
    power::Kilowatts,
    rate::{DollarsPerKilowatt, DollarsPerKilowattHour},
};

/// Assumed daily peak solar hours when sizing the installation.
const PEAK_SOLAR_HOURS: f64 = 6.0;

/// Community-wide energy requirements for riding out a blackout.
#[derive(Copy, Clone, Debug)]
pub struct EnergyNeeds {
    pub total_daily_consumption: KilowattHours,

    /// Critical-load energy needed for the whole blackout.
    pub blackout_requirement: KilowattHours,
}

impl EnergyNeeds {
    #[must_use]
    pub fn estimate(
        n_houses: u32,
        daily_consumption_per_house: KilowattHours,
        blackout_duration_hours: u32,
        critical_load: Percent,
    ) -> Self {
        let blackout_duration_days = f64::from(blackout_duration_hours) / 24.0;
        let total_daily_consumption = daily_consumption_per_house * f64::from(n_houses);
        let critical_load = total_daily_consumption * critical_load.to_proportion();
        Self {
            total_daily_consumption,
            blackout_requirement: critical_load * blackout_duration_days,
        }
    }
}

/// Battery and solar installation costs covering the blackout requirement.
#[derive(Copy, Clone, Debug)]
pub struct CostEstimate {
    pub battery: Cost,
    pub solar_capacity: Kilowatts,
    pub solar: Cost,
}

impl CostEstimate {
    #[must_use]
    pub fn estimate(
        needs: &EnergyNeeds,
        n_houses: u32,
        daily_solar_production_per_house: KilowattHours,
        battery_cost: DollarsPerKilowattHour,
        solar_cost: DollarsPerKilowatt,
    ) -> Self {
        let solar_capacity =
            Kilowatts(f64::from(n_houses) * daily_solar_production_per_house.0 / PEAK_SOLAR_HOURS)
                .ceil();
        Self {
            battery: needs.blackout_requirement.ceil() * battery_cost,
            solar_capacity,
            solar: solar_capacity * solar_cost,
        }
    }

    #[must_use]
    pub fn total(&self) -> Cost {
        self.battery + self.solar
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_estimate_with_defaults() {
        let needs = EnergyNeeds::estimate(100, KilowattHours(30.0), 48, Percent(50));
        assert_abs_diff_eq!(needs.total_daily_consumption.0, 3000.0);
        assert_abs_diff_eq!(needs.blackout_requirement.0, 3000.0);

        let costs = CostEstimate::estimate(
            &needs,
            100,
            KilowattHours(35.0),
            DollarsPerKilowattHour(200.0),
            DollarsPerKilowatt(2500.0),
        );
        assert_abs_diff_eq!(costs.battery.0, 600_000.0);
        assert_abs_diff_eq!(costs.solar_capacity.0, 584.0);
        assert_abs_diff_eq!(costs.solar.0, 1_460_000.0);
        assert_abs_diff_eq!(costs.total().0, 2_060_000.0);
    }

    #[test]
    fn test_partial_blackout_day() {
        let needs = EnergyNeeds::estimate(1, KilowattHours(24.0), 12, Percent(100));
        assert_abs_diff_eq!(needs.blackout_requirement.0, 12.0);
    }
}
