//! Filter engine shared by the catalog and the directory.
//!
//! Filtering is a linear predicate scan followed by an optional stable sort.
//! Record counts are small, so callers recompute on every keystroke.
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A record the filter engine can narrow down.
pub trait Filterable {
    /// Closed set the category chips/toggle pick from.
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;

    /// Text fields matched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Sort key in cents; records without a price keep insertion order.
    fn price_cents(&self) -> Option<i64> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    #[must_use]
    pub fn admits(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Stable value used by the `<select>` element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAsc => "low-high",
            Self::PriceDesc => "high-low",
        }
    }

    /// Inverse of [`SortKey::as_str`]; unknown values fall back to no sorting.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "low-high" => Self::PriceAsc,
            "high-low" => Self::PriceDesc,
            _ => Self::None,
        }
    }
}

/// Transient per-page filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria<C> {
    pub category: CategoryFilter<C>,
    pub query: String,
    pub sort: SortKey,
}

impl<C> Default for Criteria<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
            sort: SortKey::None,
        }
    }
}

impl<C: Copy + PartialEq> Criteria<C> {
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when the criteria would show the whole store in declared order.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self.category, CategoryFilter::All)
            && self.query.trim().is_empty()
            && self.sort == SortKey::None
    }

    pub fn reset(&mut self) {
        self.category = CategoryFilter::All;
        self.query.clear();
        self.sort = SortKey::None;
    }

    /// Whether a single record passes the category and query predicates.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Filterable<Category = C>,
    {
        if !self.category.admits(record.category()) {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Visible subset of `records` under `criteria`.
///
/// Output is a subsequence of the input (optionally re-ordered by price), so
/// feeding it back in with the same criteria yields the same list.
pub fn filter<'a, R, I>(records: I, criteria: &Criteria<R::Category>) -> Vec<&'a R>
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut visible: Vec<&R> = records
        .into_iter()
        .filter(|record| criteria.matches(*record))
        .collect();

    match criteria.sort {
        SortKey::None => {}
        SortKey::PriceAsc => visible.sort_by_key(|r| r.price_cents().unwrap_or(i64::MAX)),
        SortKey::PriceDesc => visible.sort_by_key(|r| Reverse(r.price_cents().unwrap_or(i64::MIN))),
    }

    log::debug!(
        "filter: {} visible (query={:?}, sort={:?})",
        visible.len(),
        criteria.query,
        criteria.sort
    );
    visible
}
