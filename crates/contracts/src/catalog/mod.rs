//! Catalog store and filter engine.
//!
//! The catalog is a versioned dataset embedded in the binary, parsed exactly
//! once. It is the only source of products; nothing ever mutates it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::{CategoryFilter, Product};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: NaiveDate,
    products: Vec<Product>,
}

static CATALOG: Lazy<CatalogDocument> = Lazy::new(|| {
    serde_json::from_str(include_str!("catalog.json")).expect("embedded catalog must parse")
});

/// All products, in dataset order.
pub fn catalog() -> &'static [Product] {
    &CATALOG.products
}

/// Release date of the embedded dataset.
pub fn catalog_version() -> NaiveDate {
    CATALOG.version
}

/// The visible subset of `products` for the current search term and category.
///
/// A product is kept iff its name contains `search_term` case-insensitively
/// (the empty term matches everything) and the category filter matches its
/// classified name. Input order is preserved; cart state plays no part.
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<Product> {
    let term = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term) && category.matches(&p.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{classify, Category};
    use rust_decimal::Decimal;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_parses_and_ids_are_unique() {
        let products = catalog();
        assert!(!products.is_empty());

        let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_catalog_prices_are_non_negative() {
        assert!(catalog().iter().all(|p| p.price >= Decimal::ZERO));
    }

    #[test]
    fn test_catalog_covers_every_category() {
        let covered: HashSet<Category> = catalog().iter().map(|p| classify(&p.name)).collect();
        for category in [
            Category::Santos,
            Category::Entidades,
            Category::Ciganos,
            Category::Orixas,
            Category::Outros,
        ] {
            assert!(covered.contains(&category), "missing {category:?}");
        }
    }

    #[test]
    fn test_classification_is_deterministic_over_the_catalog() {
        for p in catalog() {
            assert_eq!(classify(&p.name), classify(&p.name));
        }
    }

    #[test]
    fn test_empty_search_and_todos_returns_full_catalog_in_order() {
        let filtered = filter_products(catalog(), "", CategoryFilter::Todos);
        assert_eq!(filtered, catalog().to_vec());
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let filtered = filter_products(catalog(), "a", CategoryFilter::Todos);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|p| catalog().iter().position(|c| c.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filtered = filter_products(catalog(), "cigan", CategoryFilter::Todos);
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|p| p.name.to_lowercase().contains("cigan")));
        assert!(filtered.iter().any(|p| p.name == "Cigana Esmeralda"));
        assert!(!filtered.iter().any(|p| p.name == "São Jorge"));

        let upper = filter_products(catalog(), "CIGAN", CategoryFilter::Todos);
        assert_eq!(filtered, upper);
    }

    #[test]
    fn test_search_and_category_are_conjunctive() {
        // "ra" appears in names across categories; restricting to Santos must
        // only keep saints.
        let filtered = filter_products(
            catalog(),
            "ra",
            CategoryFilter::Selected(Category::Santos),
        );
        assert!(!filtered.is_empty());
        for p in &filtered {
            assert!(p.name.to_lowercase().contains("ra"));
            assert_eq!(classify(&p.name), Category::Santos);
        }
    }

    #[test]
    fn test_category_filter_without_search() {
        let filtered = filter_products(
            catalog(),
            "",
            CategoryFilter::Selected(Category::Orixas),
        );
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|p| classify(&p.name) == Category::Orixas));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_products(catalog(), "xyzzy", CategoryFilter::Todos).is_empty());
    }
}
