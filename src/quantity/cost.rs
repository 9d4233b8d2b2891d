use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Monetary amount in **dollars**.
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
    derive_more::Sum,
)]
pub struct Cost(pub f64);

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
