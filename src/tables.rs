use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::open_weather::Alert,
    core::{
        alert::severe_tags,
        backup::BackupSizing,
        battery::{Action, BatteryState, Decision},
        community::{CostEstimate, EnergyNeeds},
        donation::DonationImpact,
    },
    quantity::energy::KilowattHours,
};

fn styled() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_alerts_table(alerts: &[Alert]) -> Table {
    let mut table = styled();
    table.set_header(vec!["Event", "Sender", "Start", "End", "Tags"]);
    for alert in alerts {
        let is_severe = !severe_tags(alert).is_empty();
        let event_color = if is_severe { Color::Red } else { Color::DarkYellow };
        table.add_row(vec![
            Cell::new(&alert.event).fg(event_color),
            Cell::new(&alert.sender_name),
            Cell::new(alert.start.format("%Y-%m-%d %H:%M")),
            Cell::new(alert.end.format("%Y-%m-%d %H:%M")),
            Cell::new(alert.tags.join(", ")).fg(event_color),
        ]);
    }
    table
}

#[must_use]
pub fn build_decisions_table(decisions: &[Decision], threshold: KilowattHours) -> Table {
    let mut table = styled();
    table.set_header(vec!["Time", "Decision", "Battery level"]);
    for decision in decisions {
        table.add_row(vec![
            Cell::new(decision.time.format("%Y-%m-%d %H:%M")),
            Cell::new(decision.action).fg(match decision.action {
                Action::StoreEnergy => Color::Green,
                Action::PushToGrid => Color::Red,
            }),
            Cell::new(decision.level_after).set_alignment(CellAlignment::Right).fg(
                if decision.level_after > threshold { Color::Reset } else { Color::Red },
            ),
        ]);
    }
    table
}

#[must_use]
pub fn build_battery_table(state: &BatteryState) -> Table {
    let mut table = styled();
    table.add_row(vec![
        Cell::new("Battery level"),
        Cell::new(state.level).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Capacity"),
        Cell::new(state.capacity).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Full"),
        Cell::new(format!("{:.0}%", state.percent_full())).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_community_table(needs: &EnergyNeeds, costs: &CostEstimate) -> Table {
    let mut table = styled();
    table.add_row(vec![
        Cell::new("Total daily community consumption"),
        Cell::new(needs.total_daily_consumption).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy required during the blackout"),
        Cell::new(needs.blackout_requirement).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Battery cost"),
        Cell::new(costs.battery).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Solar capacity"),
        Cell::new(costs.solar_capacity).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Solar installation cost"),
        Cell::new(costs.solar).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Total project cost"),
        Cell::new(costs.total()).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_donation_table(impact: &DonationImpact) -> Table {
    let mut table = styled();
    table.add_row(vec![
        Cell::new("Monthly excess energy"),
        Cell::new(impact.donated + impact.remaining).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Energy donated"),
        Cell::new(impact.donated).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Remaining for the community grid"),
        Cell::new(impact.remaining).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Shelters powered"),
        Cell::new(impact.shelters_supported).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Trees lit"),
        Cell::new(impact.trees_lit).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_backup_table(sizing: &BackupSizing, backup_days: u32) -> Table {
    let mut table = styled();
    table.add_row(vec![
        Cell::new("Average daily consumption"),
        Cell::new(sizing.average_daily_consumption).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("{backup_days}-day backup capacity")),
        Cell::new(sizing.backup_capacity).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Peak shaving capacity"),
        Cell::new(sizing.peak_shaving_capacity).set_alignment(CellAlignment::Right),
    ]);
    table
}
