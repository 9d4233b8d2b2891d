use chrono::{DateTime, Local};

/// A time series sample.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    derive_more::Constructor,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Point<V> {
    pub time: DateTime<Local>,
    pub value: V,
}
