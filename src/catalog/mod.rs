//! Catalog
//!
//! The read-only table of purchasable products. Products are stored once behind an [`Arc`] so
//! listings and cart lines can share them without copying.

use std::{fs, path::Path, sync::Arc};

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::fixtures::CatalogFixture,
    pricing::PricingError,
    products::{Category, ParseProductError, Product, ProductId},
};

pub mod fixtures;

/// Catalog bundled with the crate.
const BUNDLED_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// Number of products shown in the featured strip.
pub const FEATURED_COUNT: usize = 4;

/// Maximum number of related products shown on a product page.
pub const RELATED_COUNT: usize = 4;

new_key_type! {
    /// Product Key
    struct ProductKey;
}

/// Catalog loading and lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price or unknown currency
    #[error(transparent)]
    Price(#[from] PricingError),

    /// Invalid category or case size
    #[error(transparent)]
    Product(#[from] ParseProductError),

    /// Rating is not a decimal between 0 and 5
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The same identifier appears twice
    #[error("Duplicate product: {0}")]
    DuplicateProduct(ProductId),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Catalog
#[derive(Debug, Default)]
pub struct Catalog {
    /// Product storage
    products: SlotMap<ProductKey, Arc<Product>>,

    /// Identifier -> key lookups
    ids: FxHashMap<ProductId, ProductKey>,

    /// Keys in catalog order
    order: Vec<ProductKey>,
}

impl Catalog {
    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails to parse.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog, a product fails to convert, or
    /// two products share an identifier.
    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_products(products)
    }

    /// Build a catalog from products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an identifier, or
    /// [`CatalogError::CurrencyMismatch`] if prices use different currencies.
    pub fn with_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for product in products {
            catalog.insert(product)?;
        }

        debug!(products = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        if let Some(first) = self.iter().next() {
            let expected = first.price.currency();
            let found = product.price.currency();

            if expected != found {
                return Err(CatalogError::CurrencyMismatch(
                    expected.iso_alpha_code.to_string(),
                    found.iso_alpha_code.to_string(),
                ));
            }
        }

        let id = product.id.clone();
        let key = self.products.insert(Arc::new(product));

        self.ids.insert(id, key);
        self.order.push(key);

        Ok(())
    }

    /// Look up a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has the identifier.
    pub fn get(&self, id: &str) -> Result<&Arc<Product>, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Look up a product by identifier.
    pub fn find(&self, id: &str) -> Option<&Arc<Product>> {
        let key = self.ids.get(id)?;

        self.products.get(*key)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// The first products in catalog order, as shown on the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.iter().take(FEATURED_COUNT)
    }

    /// Products of the same category as `id`, excluding `id` itself.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if `id` is unknown.
    pub fn related(&self, id: &str) -> Result<Vec<&Arc<Product>>, CatalogError> {
        let category = self.get(id)?.category;

        Ok(self
            .iter()
            .filter(|product| product.id.as_str() != id && product.category == category)
            .take(RELATED_COUNT)
            .collect())
    }

    /// Products in the given category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Arc<Product>> {
        self.iter()
            .filter(move |product| product.category == category)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
