use crate::{
    cli::DonateArgs,
    core::donation::DonationImpact,
    prelude::*,
    tables::build_donation_table,
};

pub fn donate(args: &DonateArgs) {
    info!(community = %args.community_name, donation = %args.donation, "splitting the excess energy…");
    let impact = DonationImpact::estimate(args.excess_energy, args.donation);
    println!("{}", build_donation_table(&impact));
}
