use crate::quantity::energy::KilowattHours;

/// Round-trip efficiency applied when sizing backup storage.
const INVERTER_EFFICIENCY: f64 = 0.9;

/// Share of the daily load targeted by peak shaving.
const PEAK_SHAVING_SHARE: f64 = 0.2;

/// Battery capacities derived from a building's annual consumption.
#[derive(Copy, Clone, Debug)]
pub struct BackupSizing {
    pub average_daily_consumption: KilowattHours,

    /// Capacity needed to ride out the requested number of backup days.
    pub backup_capacity: KilowattHours,

    /// Capacity needed to shave the daily peak.
    pub peak_shaving_capacity: KilowattHours,
}

impl BackupSizing {
    #[must_use]
    pub fn estimate(annual_consumption: KilowattHours, backup_days: u32) -> Self {
        let average_daily_consumption = annual_consumption / 365.0;
        Self {
            average_daily_consumption,
            backup_capacity: average_daily_consumption * f64::from(backup_days)
                / INVERTER_EFFICIENCY,
            peak_shaving_capacity: average_daily_consumption * PEAK_SHAVING_SHARE
                / INVERTER_EFFICIENCY,
        }
    }
}
