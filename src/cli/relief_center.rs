use crate::{
    api::palmetto::{Api, CalculateRequest, Location},
    cli::ReliefCenterArgs,
    core::backup::BackupSizing,
    prelude::*,
    tables::build_backup_table,
};

#[instrument(skip_all)]
pub async fn relief_center(args: &ReliefCenterArgs) -> Result {
    let request = CalculateRequest::new(
        Location { latitude: args.latitude, longitude: args.longitude },
        args.building.baseline_attributes(),
    );
    let response = Api::try_new(args.api_key.clone())?.calculate(&request).await?;
    let annual_consumption = response.annual_consumption();
    info!(%annual_consumption, "estimated the annual consumption");

    let sizing = BackupSizing::estimate(annual_consumption, args.backup_days);
    println!("{}", build_backup_table(&sizing, args.backup_days));
    Ok(())
}
