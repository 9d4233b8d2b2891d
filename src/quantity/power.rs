use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, rate::DollarsPerKilowatt};

/// Power measured in **kilowatts**.
#[derive(
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct Kilowatts(pub f64);

impl Kilowatts {
    #[must_use]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}kW", self.0)
    }
}

impl Mul<DollarsPerKilowatt> for Kilowatts {
    type Output = Cost;

    fn mul(self, rhs: DollarsPerKilowatt) -> Self::Output {
        Cost::from(self.0 * rhs.0)
    }
}
