//! The product catalog and the category/search filter over it.

use std::collections::HashSet;

use rust_decimal::Decimal;
use thiserror::Error;

use gourmet_core::{Category, CategoryFilter, CurrencyCode, Price, ProductId};

use crate::models::Product;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=120&width=120";

/// Highest unit price a catalog accepts (1 000 000.00).
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// A catalog failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {id} has a negative price ({price})")]
    NegativePrice { id: ProductId, price: Price },
    #[error("product {id} is priced above the catalog limit ({price})")]
    PriceTooLarge { id: ProductId, price: Price },
    #[error("product {id} is priced in {found:?}, catalog uses {expected:?}")]
    MixedCurrency {
        id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

/// The fixed set of purchasable products, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and that prices are
    /// non-negative, at most [`MAX_UNIT_PRICE`] and all in one currency.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on the first product that breaks a rule.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let currency = products.first().map(|p| p.price.currency_code);
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if product.price.amount > MAX_UNIT_PRICE {
                return Err(CatalogError::PriceTooLarge {
                    id: product.id,
                    price: product.price,
                });
            }
            if let Some(expected) = currency
                && product.price.currency_code != expected
            {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected,
                    found: product.price.currency_code,
                });
            }
        }
        Ok(Self { products })
    }

    /// The shop's built-in gourmet catalog.
    #[must_use]
    pub fn gourmet() -> Self {
        let product = |id, name: &str, cents, available, description: &str, category| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents, CurrencyCode::EUR),
            image: PLACEHOLDER_IMAGE.to_string(),
            available,
            description: description.to_string(),
            category,
        };

        Self {
            products: vec![
                product(
                    1,
                    "Filete de Res Premium",
                    2999,
                    20,
                    "Corte fino de res, madurado 28 días",
                    Category::Meats,
                ),
                product(
                    2,
                    "Costillas de Cordero",
                    3499,
                    15,
                    "Costillas de cordero de Nueva Zelanda",
                    Category::Meats,
                ),
                product(
                    3,
                    "Salmón Ahumado",
                    2499,
                    25,
                    "Salmón noruego ahumado en frío",
                    Category::Fish,
                ),
                product(
                    4,
                    "Queso Brie Trufado",
                    1999,
                    30,
                    "Queso Brie con trozos de trufa negra",
                    Category::Cheeses,
                ),
                product(
                    5,
                    "Jamón Ibérico de Bellota",
                    8999,
                    10,
                    "Jamón ibérico de bellota, curado 36 meses",
                    Category::CuredMeats,
                ),
                product(
                    6,
                    "Foie Gras",
                    3999,
                    18,
                    "Foie gras de pato con reducción de Oporto",
                    Category::Delicatessen,
                ),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in `category` whose name contains `query`, ignoring case.
    ///
    /// Keeps catalog order. An empty query matches every name.
    #[must_use]
    pub fn filter(&self, category: &CategoryFilter, query: &str) -> Vec<&Product> {
        filter_products(&self.products, category, query)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::gourmet()
    }
}

/// Filter any product sequence by category selector and name substring.
///
/// Matching is case-insensitive and order-preserving, so applying the same
/// filter to its own output returns that output unchanged.
pub fn filter_products<'a, I>(products: I, category: &CategoryFilter, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|product| category.matches(product.category))
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_gourmet_catalog_is_valid() {
        let catalog = Catalog::gourmet();
        assert_eq!(catalog.len(), 6);
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_filter_all_empty_query_returns_everything() {
        let catalog = Catalog::gourmet();
        let visible = catalog.filter(&CategoryFilter::All, "");
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::gourmet();
        let visible = catalog.filter(&CategoryFilter::Only(Category::Meats), "");
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn test_filter_by_query_is_case_insensitive() {
        let catalog = Catalog::gourmet();
        let visible = catalog.filter(&CategoryFilter::All, "SALMÓN");
        assert_eq!(ids(&visible), vec![3]);
    }

    #[test]
    fn test_filter_combines_category_and_query() {
        let catalog = Catalog::gourmet();
        let visible = catalog.filter(&CategoryFilter::Only(Category::Fish), "res");
        assert!(visible.is_empty());
        let visible = catalog.filter(&CategoryFilter::Only(Category::Meats), "res");
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_filter_empty_category() {
        let catalog = Catalog::gourmet();
        assert!(
            catalog
                .filter(&CategoryFilter::Only(Category::Wines), "")
                .is_empty()
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::gourmet();
        let cases = [
            (CategoryFilter::All, ""),
            (CategoryFilter::All, "de"),
            (CategoryFilter::Only(Category::Meats), "co"),
            (CategoryFilter::Only(Category::Cheeses), "brie"),
        ];
        for (category, query) in cases {
            let once = catalog.filter(&category, query);
            let twice = filter_products(once.iter().copied(), &category, query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut products = Catalog::gourmet().products().to_vec();
        products.push(products[0].clone());
        assert_eq!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(ProductId::new(1)))
        );
    }

    #[test]
    fn test_new_rejects_negative_price() {
        let mut products = Catalog::gourmet().products().to_vec();
        products[2].price.amount = Decimal::new(-1, 0);
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_new_rejects_price_above_limit() {
        let mut products = Catalog::gourmet().products().to_vec();
        products[1].price.amount = Decimal::MAX;
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::PriceTooLarge { id, .. }) if id == ProductId::new(2)
        ));
    }

    #[test]
    fn test_new_accepts_price_at_limit() {
        let mut products = Catalog::gourmet().products().to_vec();
        products[1].price.amount = MAX_UNIT_PRICE;
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_new_rejects_mixed_currency() {
        let mut products = Catalog::gourmet().products().to_vec();
        products[4].price.currency_code = CurrencyCode::USD;
        assert_eq!(
            Catalog::new(products),
            Err(CatalogError::MixedCurrency {
                id: ProductId::new(5),
                expected: CurrencyCode::EUR,
                found: CurrencyCode::USD,
            })
        );
    }

    #[test]
    fn test_new_accepts_single_non_default_currency() {
        let mut products = Catalog::gourmet().products().to_vec();
        for product in &mut products {
            product.price.currency_code = CurrencyCode::GBP;
        }
        assert!(Catalog::new(products).is_ok());
    }
}
