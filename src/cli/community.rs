use crate::{
    cli::CommunityArgs,
    core::community::{CostEstimate, EnergyNeeds},
    tables::build_community_table,
};

pub fn community(args: &CommunityArgs) {
    let needs = EnergyNeeds::estimate(
        args.houses,
        args.daily_consumption,
        args.blackout_duration_hours,
        args.critical_load,
    );
    let costs = CostEstimate::estimate(
        &needs,
        args.houses,
        args.daily_solar_production,
        args.battery_cost,
        args.solar_cost,
    );
    println!("{}", build_community_table(&needs, &costs));
}
