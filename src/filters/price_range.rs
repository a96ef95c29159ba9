//! Price ranges

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};

use crate::filters::FilterError;

/// Price bands offered by the price filter.
///
/// Both bounds are inclusive; the top band has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRange {
    /// Up to R$ 5.000
    UpTo5000,

    /// R$ 5.000 to R$ 10.000
    From5000To10000,

    /// R$ 10.000 to R$ 20.000
    From10000To20000,

    /// Above R$ 20.000
    Above20000,
}

impl PriceRange {
    /// Every range, in display order.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::UpTo5000,
        PriceRange::From5000To10000,
        PriceRange::From10000To20000,
        PriceRange::Above20000,
    ];

    /// Identifier used by the filter UI.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PriceRange::UpTo5000 => "0-5000",
            PriceRange::From5000To10000 => "5000-10000",
            PriceRange::From10000To20000 => "10000-20000",
            PriceRange::Above20000 => "20000+",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo5000 => "Até R$ 5.000",
            PriceRange::From5000To10000 => "R$ 5.000 - R$ 10.000",
            PriceRange::From10000To20000 => "R$ 10.000 - R$ 20.000",
            PriceRange::Above20000 => "Acima de R$ 20.000",
        }
    }

    /// Lower and upper bound in minor units.
    #[must_use]
    pub fn bounds(self) -> (i64, Option<i64>) {
        match self {
            PriceRange::UpTo5000 => (0, Some(500_000)),
            PriceRange::From5000To10000 => (500_000, Some(1_000_000)),
            PriceRange::From10000To20000 => (1_000_000, Some(2_000_000)),
            PriceRange::Above20000 => (2_000_000, None),
        }
    }

    /// Check whether a price falls inside the range.
    pub fn contains(self, price: &Money<'_, Currency>) -> bool {
        let minor = price.to_minor_units();
        let (min, max) = self.bounds();

        minor >= min && max.is_none_or(|max| minor <= max)
    }
}

impl FromStr for PriceRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|range| range.id() == s)
            .ok_or_else(|| FilterError::UnknownPriceRange(s.to_string()))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
