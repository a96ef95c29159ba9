//! Catalog data files

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    pricing::parse_money,
    products::{Category, Product, ProductId, ProductSpecs},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Brand name
    pub brand: String,

    /// Product price (e.g., "4999.00 BRL")
    pub price: String,

    /// Price before markdown, same format as `price`
    #[serde(default)]
    pub original_price: Option<String>,

    /// Category identifier
    pub category: Category,

    /// Case size (e.g., "42mm")
    pub size: String,

    /// Rating as a decimal string (e.g., "4.9")
    pub rating: String,

    /// Review count
    pub reviews: u32,

    /// Image URLs
    pub images: Vec<String>,

    /// Description
    pub description: String,

    /// Technical sheet
    pub specs: ProductSpecs,

    /// Availability
    pub in_stock: bool,

    /// Units sold
    pub sold_count: u32,

    /// New arrival flag
    pub is_new: bool,
}

impl TryFrom<ProductFixture> for Product {
    type Error = CatalogError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_money(&fixture.price)?;

        let original_price = fixture
            .original_price
            .as_deref()
            .map(parse_money)
            .transpose()?;

        if let Some(original) = original_price
            && original.currency() != price.currency()
        {
            return Err(CatalogError::CurrencyMismatch(
                price.currency().iso_alpha_code.to_string(),
                original.currency().iso_alpha_code.to_string(),
            ));
        }

        Ok(Product {
            id: ProductId::new(fixture.id),
            name: fixture.name,
            brand: fixture.brand,
            price,
            original_price,
            category: fixture.category,
            size: fixture.size.parse()?,
            rating: parse_rating(&fixture.rating)?,
            reviews: fixture.reviews,
            images: fixture.images.into_iter().collect(),
            description: fixture.description,
            specs: fixture.specs,
            in_stock: fixture.in_stock,
            sold_count: fixture.sold_count,
            is_new: fixture.is_new,
        })
    }
}

/// Parse a rating string (e.g., "4.9") and check it lies between 0 and 5.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRating`] if the value is not a decimal in `0..=5`.
pub fn parse_rating(s: &str) -> Result<Decimal, CatalogError> {
    let rating = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidRating(s.to_string()))?;

    if rating < Decimal::ZERO || rating > Decimal::from(5) {
        return Err(CatalogError::InvalidRating(s.to_string()));
    }

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::products::{CaseSize, ParseProductError};

    use super::*;

    const FIXTURE: &str = r#"
products:
  - id: "2"
    name: Midnight Sport Pro
    brand: Christian Watches
    price: 4999.00 BRL
    category: esportivo
    size: 44mm
    rating: "4.7"
    reviews: 234
    images:
      - /midnight.jpeg
    description: Robusto.
    specs:
      material: Titânio
      movement: Quartzo
      water_resistance: 300m
      case_diameter: 44mm
      warranty: 3 anos
    in_stock: true
    sold_count: 156
    is_new: true
"#;

    fn fixture() -> Result<ProductFixture, serde_norway::Error> {
        let mut parsed: CatalogFixture = serde_norway::from_str(FIXTURE)?;

        Ok(parsed.products.remove(0))
    }

    #[test]
    fn product_fixture_converts_into_product() -> TestResult {
        let product = Product::try_from(fixture()?)?;

        assert_eq!(product.id.as_str(), "2");
        assert_eq!(product.price, Money::from_minor(499_900, BRL));
        assert_eq!(product.original_price, None);
        assert_eq!(product.size, CaseSize::from_millimetres(44));
        assert_eq!(product.rating, Decimal::new(47, 1));
        assert_eq!(product.cover_image(), Some("/midnight.jpeg"));

        Ok(())
    }

    #[test]
    fn product_fixture_rejects_bad_size() -> TestResult {
        let mut fixture = fixture()?;
        fixture.size = "large".to_string();

        let result = Product::try_from(fixture);

        assert!(matches!(
            result,
            Err(CatalogError::Product(ParseProductError::InvalidSize(_)))
        ));

        Ok(())
    }

    #[test]
    fn product_fixture_rejects_mixed_currency_markdown() -> TestResult {
        let mut fixture = fixture()?;
        fixture.original_price = Some("5999.00 USD".to_string());

        let result = Product::try_from(fixture);

        assert!(matches!(result, Err(CatalogError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn product_fixture_keeps_same_currency_markdown() -> TestResult {
        let mut fixture = fixture()?;
        fixture.original_price = Some("5999.00 BRL".to_string());

        let product = Product::try_from(fixture)?;

        assert_eq!(product.original_price, Some(Money::from_minor(599_900, BRL)));

        Ok(())
    }

    #[test]
    fn parse_rating_rejects_out_of_range() {
        assert!(matches!(
            parse_rating("5.1"),
            Err(CatalogError::InvalidRating(_))
        ));
        assert!(matches!(
            parse_rating("-1"),
            Err(CatalogError::InvalidRating(_))
        ));
    }

    #[test]
    fn unknown_category_fails_to_deserialize() {
        let yaml = FIXTURE.replace("esportivo", "casual");

        let result: Result<CatalogFixture, _> = serde_norway::from_str(&yaml);

        assert!(result.is_err());
    }
}
