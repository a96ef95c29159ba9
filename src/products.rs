//! Products

use std::{borrow::Borrow, fmt, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::pricing::{self, INSTALLMENTS, PricingError};

/// Errors raised when parsing product attributes from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseProductError {
    /// The value does not name a known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The value is not a case size such as `42mm`.
    #[error("Invalid case size: {0}")]
    InvalidSize(String),
}

/// Catalog-wide product identifier, e.g. `"5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Men's watches
    Masculino,

    /// Women's watches
    Feminino,

    /// Sports watches
    Esportivo,

    /// Luxury line
    Luxo,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Masculino,
        Category::Feminino,
        Category::Esportivo,
        Category::Luxo,
    ];

    /// Identifier used in query strings and data files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Masculino => "masculino",
            Category::Feminino => "feminino",
            Category::Esportivo => "esportivo",
            Category::Luxo => "luxo",
        }
    }

    /// Human readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Masculino => "Masculino",
            Category::Feminino => "Feminino",
            Category::Esportivo => "Esportivo",
            Category::Luxo => "Luxo",
        }
    }

    /// Icon shown next to the category name.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Category::Masculino => "👔",
            Category::Feminino => "💎",
            Category::Esportivo => "🏃",
            Category::Luxo => "👑",
        }
    }
}

impl FromStr for Category {
    type Err = ParseProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseProductError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Watch case diameter in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseSize(u8);

impl CaseSize {
    /// Sizes offered by the size filter.
    pub const ALL: [CaseSize; 7] = [
        CaseSize(32),
        CaseSize(36),
        CaseSize(38),
        CaseSize(40),
        CaseSize(42),
        CaseSize(44),
        CaseSize(46),
    ];

    /// Create a case size from a diameter in millimetres.
    #[must_use]
    pub const fn from_millimetres(millimetres: u8) -> Self {
        Self(millimetres)
    }

    /// Returns the diameter in millimetres.
    #[must_use]
    pub fn millimetres(self) -> u8 {
        self.0
    }
}

impl FromStr for CaseSize {
    type Err = ParseProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_suffix("mm")
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|millimetres| *millimetres > 0)
            .map(CaseSize)
            .ok_or_else(|| ParseProductError::InvalidSize(s.to_string()))
    }
}

impl fmt::Display for CaseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Technical sheet of a watch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductSpecs {
    /// Case and bracelet material
    pub material: String,

    /// Movement type
    pub movement: String,

    /// Water resistance, e.g. `100m`
    pub water_resistance: String,

    /// Case diameter as printed on the sheet
    pub case_diameter: String,

    /// Warranty period
    pub warranty: String,
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Brand name
    pub brand: String,

    /// Current price
    pub price: Money<'static, Currency>,

    /// Price before the current markdown, if any
    pub original_price: Option<Money<'static, Currency>>,

    /// Product category
    pub category: Category,

    /// Case size
    pub size: CaseSize,

    /// Average rating between 0 and 5
    pub rating: Decimal,

    /// Number of reviews
    pub reviews: u32,

    /// Image URLs, first one is the cover
    pub images: SmallVec<[String; 3]>,

    /// Marketing description
    pub description: String,

    /// Technical sheet
    pub specs: ProductSpecs,

    /// Whether the product can be added to a cart
    pub in_stock: bool,

    /// Units sold so far
    pub sold_count: u32,

    /// Whether the product is flagged as new
    pub is_new: bool,
}

impl Product {
    /// Returns the markdown off the original price, if the product has one.
    pub fn discount(&self) -> Option<Percentage> {
        let original = self.original_price?.to_minor_units();

        if original <= 0 {
            return None;
        }

        let price = Decimal::from(self.price.to_minor_units());

        Some(Percentage::from(Decimal::ONE - price / Decimal::from(original)))
    }

    /// Returns the markdown as whole percent points, rounded half away from zero.
    pub fn discount_points(&self) -> Option<Decimal> {
        self.discount().map(|discount| {
            (discount * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        })
    }

    /// Value of each interest-free instalment of the price.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the division overflows.
    pub fn installment(&self) -> Result<Money<'static, Currency>, PricingError> {
        pricing::installment(&self.price, INSTALLMENTS)
    }

    /// Returns the cover image, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
