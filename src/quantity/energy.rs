use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, rate::DollarsPerKilowattHour};

/// Energy measured in **kilowatt-hours**.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct KilowattHours(pub f64);

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn clamp(mut self, min: Self, max: Self) -> Self {
        if self < min {
            self = min;
        }
        if self > max {
            self = max;
        }
        self
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kWh", self.0)
    }
}

impl Mul<f64> for KilowattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for KilowattHours {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Div<Self> for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Mul<DollarsPerKilowattHour> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: DollarsPerKilowattHour) -> Self::Output {
        Cost::from(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(
            KilowattHours(-3.0).clamp(KilowattHours::ZERO, KilowattHours(300.0)),
            KilowattHours::ZERO,
        );
        assert_eq!(
            KilowattHours(301.0).clamp(KilowattHours::ZERO, KilowattHours(300.0)),
            KilowattHours(300.0),
        );
        assert_eq!(
            KilowattHours(150.0).clamp(KilowattHours::ZERO, KilowattHours(300.0)),
            KilowattHours(150.0),
        );
    }

    #[test]
    fn test_ceil() {
        assert_eq!(KilowattHours(2999.1).ceil(), KilowattHours(3000.0));
    }
}
