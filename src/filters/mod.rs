//! Filters
//!
//! Category, size and price filters plus a stable sort over the catalog. [`apply`] is pure:
//! the same catalog and [`FilterState`] always give the same listing.

use std::sync::Arc;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    filters::{price_range::PriceRange, sort::SortKey},
    products::{CaseSize, Category, ParseProductError, Product},
};

pub mod price_range;
pub mod sort;

/// Errors raised when parsing filter selections from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Invalid category or case size
    #[error(transparent)]
    Product(#[from] ParseProductError),

    /// The value does not name a price range.
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    /// The value does not name a sort key.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Current filter selection of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: SmallVec<[Category; 4]>,
    sizes: SmallVec<[CaseSize; 7]>,
    price_range: Option<PriceRange>,
    sort: SortKey,
}

impl FilterState {
    /// Create an empty selection with the default sort.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial selection from the listing's `categoria` query value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Product`] if the value is not a category.
    pub fn from_query(categoria: Option<&str>) -> Result<Self, FilterError> {
        let mut state = Self::default();

        if let Some(category) = categoria {
            state.categories.push(category.parse()?);
        }

        Ok(state)
    }

    /// Replace the selected categories.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.clear();

        for category in categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }

        self
    }

    /// Replace the selected sizes.
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = CaseSize>) -> Self {
        self.sizes.clear();

        for size in sizes {
            if !self.sizes.contains(&size) {
                self.sizes.push(size);
            }
        }

        self
    }

    /// Replace the selected price range.
    #[must_use]
    pub fn with_price_range(mut self, range: Option<PriceRange>) -> Self {
        self.price_range = range;
        self
    }

    /// Replace the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select the category, or deselect it if already selected.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(index) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(index);
        } else {
            self.categories.push(category);
        }
    }

    /// Select the size, or deselect it if already selected.
    pub fn toggle_size(&mut self, size: CaseSize) {
        if let Some(index) = self.sizes.iter().position(|s| *s == size) {
            self.sizes.remove(index);
        } else {
            self.sizes.push(size);
        }
    }

    /// Select the price range; selecting the current range clears it.
    pub fn toggle_price_range(&mut self, range: PriceRange) {
        self.price_range = if self.price_range == Some(range) {
            None
        } else {
            Some(range)
        };
    }

    /// Change the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Drop every filter. The sort key is kept.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.sizes.clear();
        self.price_range = None;
    }

    /// Check whether any filter is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of active filter selections, as shown on the filter badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.sizes.len() + usize::from(self.price_range.is_some())
    }

    /// Selected categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Selected sizes.
    #[must_use]
    pub fn sizes(&self) -> &[CaseSize] {
        &self.sizes
    }

    /// Selected price range.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// Sort key.
    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Check whether a product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.sizes.is_empty() || self.sizes.contains(&product.size))
            && self
                .price_range
                .is_none_or(|range| range.contains(&product.price))
    }
}

/// Filter and sort the catalog. Ties keep catalog order.
pub fn apply(catalog: &Catalog, state: &FilterState) -> Vec<Arc<Product>> {
    let mut listing: Vec<Arc<Product>> = catalog
        .iter()
        .filter(|product| state.matches(product))
        .cloned()
        .collect();

    listing.sort_by(|a, b| state.sort.compare(a, b));

    listing
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn names(listing: &[Arc<Product>]) -> Vec<&str> {
        listing.iter().map(|product| product.name.as_str()).collect()
    }

    #[test]
    fn empty_state_passes_whole_catalog() -> TestResult {
        let catalog = Catalog::bundled()?;

        let listing = apply(&catalog, &FilterState::new());

        assert_eq!(listing.len(), catalog.len());

        Ok(())
    }

    #[test]
    fn luxury_featured_orders_by_rating() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new().with_categories([Category::Luxo]);

        let listing = apply(&catalog, &state);

        assert_eq!(names(&listing), ["Diamond Luxe", "Royal Chronograph Elite"]);

        Ok(())
    }

    #[test]
    fn featured_ties_keep_catalog_order() -> TestResult {
        let catalog = Catalog::bundled()?;

        let listing = apply(&catalog, &FilterState::new());

        // Royal Chronograph Elite and Classic Gentleman both rate 4.9.
        assert_eq!(
            names(&listing).get(1..3),
            Some(&["Royal Chronograph Elite", "Classic Gentleman"][..])
        );

        Ok(())
    }

    #[test]
    fn size_filter_keeps_matching_sizes() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new()
            .with_sizes([CaseSize::from_millimetres(42)])
            .with_sort(SortKey::PriceLow);

        let listing = apply(&catalog, &state);

        assert_eq!(
            names(&listing),
            [
                "Christian Modern White",
                "Urban Explorer",
                "Royal Chronograph Elite"
            ]
        );

        Ok(())
    }

    #[test]
    fn price_range_filter_is_inclusive() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new()
            .with_price_range(Some(PriceRange::UpTo5000))
            .with_sort(SortKey::PriceHigh);

        let listing = apply(&catalog, &state);

        assert_eq!(
            names(&listing),
            ["Midnight Sport Pro", "Urban Explorer", "Christian Modern White"]
        );

        Ok(())
    }

    #[test]
    fn price_low_sort_is_non_decreasing() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new().with_sort(SortKey::PriceLow);

        let listing = apply(&catalog, &state);

        assert!(
            listing
                .windows(2)
                .all(|pair| match pair {
                    [a, b] => a.price.to_minor_units() <= b.price.to_minor_units(),
                    _ => true,
                }),
            "prices should be non-decreasing"
        );

        Ok(())
    }

    #[test]
    fn best_selling_puts_most_sold_first() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new().with_sort(SortKey::BestSelling);

        let listing = apply(&catalog, &state);

        assert_eq!(names(&listing).first(), Some(&"Urban Explorer"));
        assert_eq!(names(&listing).last(), Some(&"Diamond Luxe"));

        Ok(())
    }

    #[test]
    fn newest_keeps_catalog_order_within_groups() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new().with_sort(SortKey::Newest);

        let listing = apply(&catalog, &state);

        assert_eq!(
            names(&listing),
            [
                "Christian Modern White",
                "Midnight Sport Pro",
                "Diamond Luxe",
                "Pearl Delicacy",
                "Royal Chronograph Elite",
                "Elegance Rose",
                "Classic Gentleman",
                "Urban Explorer",
                "Titan Bold"
            ]
        );

        Ok(())
    }

    #[test]
    fn filters_can_produce_empty_listing() -> TestResult {
        let catalog = Catalog::bundled()?;
        let state = FilterState::new()
            .with_categories([Category::Feminino])
            .with_price_range(Some(PriceRange::Above20000));

        assert!(apply(&catalog, &state).is_empty());

        Ok(())
    }

    #[test]
    fn toggles_add_and_remove_selections() {
        let mut state = FilterState::new();

        state.toggle_category(Category::Luxo);
        state.toggle_size(CaseSize::from_millimetres(38));
        state.toggle_price_range(PriceRange::Above20000);

        assert_eq!(state.active_count(), 3);

        state.toggle_category(Category::Luxo);
        state.toggle_price_range(PriceRange::Above20000);

        assert_eq!(state.categories(), &[] as &[Category]);
        assert_eq!(state.price_range(), None);
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn selecting_another_price_range_replaces_it() {
        let mut state = FilterState::new();

        state.toggle_price_range(PriceRange::UpTo5000);
        state.toggle_price_range(PriceRange::From5000To10000);

        assert_eq!(state.price_range(), Some(PriceRange::From5000To10000));
    }

    #[test]
    fn clear_keeps_sort() {
        let mut state = FilterState::new()
            .with_categories([Category::Masculino, Category::Masculino])
            .with_sort(SortKey::Newest);

        assert_eq!(state.categories(), &[Category::Masculino]);

        state.clear();

        assert!(!state.has_filters());
        assert_eq!(state.sort(), SortKey::Newest);
    }

    #[test]
    fn from_query_selects_category() -> TestResult {
        let state = FilterState::from_query(Some("feminino"))?;

        assert_eq!(state.categories(), &[Category::Feminino]);
        assert_eq!(FilterState::from_query(None)?, FilterState::new());

        Ok(())
    }

    #[test]
    fn from_query_rejects_unknown_category() {
        let result = FilterState::from_query(Some("infantil"));

        assert_eq!(
            result,
            Err(FilterError::Product(ParseProductError::UnknownCategory(
                "infantil".to_string()
            )))
        );
    }
}
