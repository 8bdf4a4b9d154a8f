//! Derived participant figures returned by the aggregator.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Participants per cohort bucket.
///
/// `detached_leaders` and `detached_guests` count people who are not tied to
/// any segment. The aggregator always leaves them at zero; they are filled
/// from the event draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct NormalizedParticipants {
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub lc: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub lc_kambusieri: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub eg: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub eg_kambusieri: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub rs: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub rs_kambusieri: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub leaders: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    #[serde(default)]
    pub detached_leaders: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    #[serde(default)]
    pub detached_guests: i64,
}

fn sum<const N: usize>(values: [i64; N]) -> i64 {
    values.into_iter().fold(0, i64::saturating_add)
}

impl NormalizedParticipants {
    pub fn youth(&self) -> i64 {
        sum([self.lc, self.eg, self.rs])
    }

    pub fn kambusieri(&self) -> i64 {
        sum([self.lc_kambusieri, self.eg_kambusieri, self.rs_kambusieri])
    }

    /// Sum of every bucket, detached people included.
    pub fn total(&self) -> i64 {
        sum([
            self.youth(),
            self.kambusieri(),
            self.leaders,
            self.detached_leaders,
            self.detached_guests,
        ])
    }
}

impl Add for NormalizedParticipants {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for NormalizedParticipants {
    fn add_assign(&mut self, rhs: Self) {
        self.lc += rhs.lc;
        self.lc_kambusieri += rhs.lc_kambusieri;
        self.eg += rhs.eg;
        self.eg_kambusieri += rhs.eg_kambusieri;
        self.rs += rhs.rs;
        self.rs_kambusieri += rhs.rs_kambusieri;
        self.leaders += rhs.leaders;
        self.detached_leaders += rhs.detached_leaders;
        self.detached_guests += rhs.detached_guests;
    }
}

/// Lodging needs split by accommodation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AccommodationSummary {
    pub needs_indoor: bool,
    pub needs_tents: bool,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub indoor_capacity: i64,
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub tents_capacity: i64,
}
