use crate::quantity::{energy::KilowattHours, percent::Percent};

/// Daily energy that keeps one emergency shelter running.
const SHELTER_CONSUMPTION: KilowattHours = KilowattHours(30.0);

/// Energy that lights up one tree.
const TREE_CONSUMPTION: KilowattHours = KilowattHours(1.0);

/// Split of the excess energy and what the donated share buys the community.
#[derive(Copy, Clone, Debug)]
pub struct DonationImpact {
    pub donated: KilowattHours,
    pub remaining: KilowattHours,
    pub shelters_supported: u64,
    pub trees_lit: u64,
}

impl DonationImpact {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn estimate(excess: KilowattHours, donation: Percent) -> Self {
        let donated = excess * donation.to_proportion();
        Self {
            donated,
            remaining: excess - donated,
            shelters_supported: (donated / SHELTER_CONSUMPTION).floor() as u64,
            trees_lit: (donated / TREE_CONSUMPTION).floor() as u64,
        }
    }
}
