//! Static product catalog.
use crate::data::{DataError, Record, ensure_unique_ids, find_by_id};
use crate::filter::{Criteria, Filterable, filter};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Closed set of shop categories, in the order the category chips show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Apparel,
    Accessories,
    Gear,
    Stickers,
    Essentials,
}

impl ProductCategory {
    pub const ALL: [Self; 5] = [
        Self::Apparel,
        Self::Accessories,
        Self::Gear,
        Self::Stickers,
        Self::Essentials,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apparel => "Apparel",
            Self::Accessories => "Accessories",
            Self::Gear => "Gear",
            Self::Stickers => "Stickers",
            Self::Essentials => "Essentials",
        }
    }

    /// Translation key suffix (`shop.category.<key>`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Apparel => "apparel",
            Self::Accessories => "accessories",
            Self::Gear => "gear",
            Self::Stickers => "stickers",
            Self::Essentials => "essentials",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Pre-Order")]
    PreOrder,
    #[serde(rename = "Sold Out")]
    SoldOut,
}

impl Availability {
    /// Sold-out products stay listed but cannot be added to a cart.
    #[must_use]
    pub const fn allows_purchase(self) -> bool {
        !matches!(self, Self::SoldOut)
    }

    /// Cards only badge non-default availability.
    #[must_use]
    pub const fn shows_badge(self) -> bool {
        !matches!(self, Self::InStock)
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::PreOrder => "pre_order",
            Self::SoldOut => "sold_out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    /// Price in cents to avoid floating-point issues
    pub price_cents: i64,
    pub images: Vec<String>,
    pub short_desc: String,
    pub full_desc: String,
    #[serde(default)]
    pub tags: SmallVec<[String; 4]>,
    pub availability: Availability,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub specs: Vec<ProductSpec>,
}

impl Product {
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    #[must_use]
    pub fn is_bestseller(&self) -> bool {
        self.tags
            .iter()
            .any(|t| t.to_lowercase().contains("bestseller"))
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Product {
    type Category = ProductCategory;

    fn category(&self) -> ProductCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(3 + self.tags.len());
        fields.push(self.name.as_str());
        fields.push(self.category.label());
        fields.push(self.short_desc.as_str());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn price_cents(&self) -> Option<i64> {
        Some(self.price_cents)
    }
}

pub type ProductCriteria = Criteria<ProductCategory>;

/// The immutable product list loaded once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, ids repeat, a product has no
    /// image, or a price is negative.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Catalog bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn load_from_static() -> Result<Self, DataError> {
        Self::from_json(include_str!("../data/products.json"))
    }

    fn validate(&self) -> Result<(), DataError> {
        ensure_unique_ids("product", &self.products)?;
        for product in &self.products {
            if product.images.is_empty() {
                return Err(DataError::MissingImages(product.id.clone()));
            }
            if product.price_cents < 0 {
                return Err(DataError::NegativePrice {
                    id: product.id.clone(),
                    price_cents: product.price_cents,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    #[must_use]
    pub fn visible(&self, criteria: &ProductCriteria) -> Vec<&Product> {
        filter(&self.products, criteria)
    }

    /// Home-page picks: bestsellers first, topped up with other available
    /// products in catalog order. Sold-out products are never featured.
    #[must_use]
    pub fn featured(&self, count: usize) -> Vec<&Product> {
        let available = || {
            self.products
                .iter()
                .filter(|p| p.availability.allows_purchase())
        };
        available()
            .filter(|p| p.is_bestseller())
            .chain(available().filter(|p| !p.is_bestseller()))
            .take(count)
            .collect()
    }
}

/// Format cents as a whole-euro price when possible (`89€`, `12.50€`).
#[must_use]
pub fn format_eur(price_cents: i64) -> String {
    let sign = if price_cents < 0 { "-" } else { "" };
    let abs = price_cents.unsigned_abs();
    let (euros, cents) = (abs / 100, abs % 100);
    if cents == 0 {
        format!("{sign}{euros}€")
    } else {
        format!("{sign}{euros}.{cents:02}€")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, SortKey};

    fn catalog() -> Catalog {
        Catalog::load_from_static().expect("bundled catalog")
    }

    #[test]
    fn bundled_catalog_loads() {
        let c = catalog();
        assert_eq!(c.len(), 21);
        assert!(c.products.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn sold_out_products_stay_filterable() {
        let c = catalog();
        let criteria = ProductCriteria::default().with_query("cleaning kit");
        let found = c.visible(&criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].availability, Availability::SoldOut);
        assert!(!found[0].availability.allows_purchase());
    }

    #[test]
    fn tags_are_searchable() {
        let c = catalog();
        let criteria = ProductCriteria::default().with_query("value pack");
        let ids: Vec<_> = c.visible(&criteria).into_iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["acc-2", "sticker-1"]);
    }

    #[test]
    fn featured_prefers_bestsellers_and_skips_sold_out() {
        let c = catalog();
        let ids: Vec<_> = c.featured(3).into_iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["apparel-1", "ess-1", "ess-5"]);
        let more: Vec<_> = c.featured(5).into_iter().map(|p| p.id.as_str()).collect();
        assert_eq!(more, ["apparel-1", "ess-1", "ess-5", "apparel-2", "apparel-3"]);
    }

    #[test]
    fn sorted_gear_runs_cheapest_first() {
        let c = catalog();
        let criteria = ProductCriteria::default()
            .with_category(CategoryFilter::Only(ProductCategory::Gear))
            .with_sort(SortKey::PriceAsc);
        let prices: Vec<_> = c.visible(&criteria).into_iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, [6500, 7900, 12900, 18900]);
    }

    #[test]
    fn rejects_products_without_images() {
        let json = r#"{"products":[{"id":"x","name":"X","category":"Gear","price_cents":100,
            "images":[],"short_desc":"","full_desc":"","availability":"In Stock"}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(DataError::MissingImages(id)) if id == "x"
        ));
    }

    #[test]
    fn rejects_negative_prices() {
        let json = r#"{"products":[{"id":"x","name":"X","category":"Gear","price_cents":-1,
            "images":["a.jpg"],"short_desc":"","full_desc":"","availability":"In Stock"}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(DataError::NegativePrice { price_cents: -1, .. })
        ));
    }

    #[test]
    fn eur_formatting_drops_zero_cents() {
        assert_eq!(format_eur(8900), "89€");
        assert_eq!(format_eur(1250), "12.50€");
        assert_eq!(format_eur(5), "0.05€");
        assert_eq!(format_eur(-250), "-2.50€");
    }
}
