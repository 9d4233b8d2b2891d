use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whole percentage in `0..=100`.
#[derive(
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct Percent(pub u16);

impl Percent {
    #[must_use]
    pub const fn to_proportion(self) -> f64 {
        0.01 * self.0 as f64
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_proportion() {
        assert_abs_diff_eq!(Percent(25).to_proportion(), 0.25);
    }
}
