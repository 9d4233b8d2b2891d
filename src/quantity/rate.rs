use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Dollars per kilowatt-hour of storage.
#[derive(Clone, Copy, PartialEq, Deserialize, Serialize, derive_more::From, derive_more::FromStr)]
pub struct DollarsPerKilowattHour(pub f64);

impl Display for DollarsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kWh", self.0)
    }
}

/// Dollars per kilowatt of installed capacity.
#[derive(Clone, Copy, PartialEq, Deserialize, Serialize, derive_more::From, derive_more::FromStr)]
pub struct DollarsPerKilowatt(pub f64);

impl Display for DollarsPerKilowatt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kW", self.0)
    }
}
