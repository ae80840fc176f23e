//! Price tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price tier of a phone, derived from its USD base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Below $250
    Budget,
    /// $250 up to $599
    MidRange,
    /// $600 up to $999
    Premium,
    /// $1000 and above
    Flagship,
}

impl Category {
    /// Lower bound (inclusive) of the mid-range tier.
    pub const MID_RANGE_FROM: u32 = 250;
    /// Lower bound (inclusive) of the premium tier.
    pub const PREMIUM_FROM: u32 = 600;
    /// Lower bound (inclusive) of the flagship tier.
    pub const FLAGSHIP_FROM: u32 = 1000;

    /// Classify a USD base price.
    pub fn from_usd_price(price: u32) -> Self {
        if price < Self::MID_RANGE_FROM {
            Category::Budget
        } else if price < Self::PREMIUM_FROM {
            Category::MidRange
        } else if price < Self::FLAGSHIP_FROM {
            Category::Premium
        } else {
            Category::Flagship
        }
    }

    /// The serialized name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Budget => "budget",
            Category::MidRange => "mid_range",
            Category::Premium => "premium",
            Category::Flagship => "flagship",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
