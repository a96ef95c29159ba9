//! Sort keys

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{filters::FilterError, products::Product};

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Highest rating first
    #[default]
    Featured,

    /// Cheapest first
    PriceLow,

    /// Most expensive first
    PriceHigh,

    /// Most units sold first
    BestSelling,

    /// New arrivals first
    Newest,
}

impl SortKey {
    /// Every sort key, in display order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::BestSelling,
        SortKey::Newest,
    ];

    /// Identifier used by the sort dropdown.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::BestSelling => "best-selling",
            SortKey::Newest => "newest",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Em Destaque",
            SortKey::PriceLow => "Menor Preço",
            SortKey::PriceHigh => "Maior Preço",
            SortKey::BestSelling => "Mais Vendidos",
            SortKey::Newest => "Novidades",
        }
    }

    /// Compare two products under this key. Equal products keep their relative order when
    /// used with a stable sort.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Featured => b.rating.cmp(&a.rating),
            SortKey::PriceLow => a.price.to_minor_units().cmp(&b.price.to_minor_units()),
            SortKey::PriceHigh => b.price.to_minor_units().cmp(&a.price.to_minor_units()),
            SortKey::BestSelling => b.sold_count.cmp(&a.sold_count),
            SortKey::Newest => b.is_new.cmp(&a.is_new),
        }
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| FilterError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
