//! Request parameters resolved into a store-independent query.

use crate::models::{ProductListParams, PRODUCTS_PER_PAGE};

/// Price ordering of a listing; ties break on insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    #[default]
    None,
    Ascending,
    Descending,
}

impl PriceSort {
    /// `highest` sorts descending, `lowest` ascending, anything else not at all.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("highest") => PriceSort::Descending,
            Some("lowest") => PriceSort::Ascending,
            _ => PriceSort::None,
        }
    }
}

/// Conjunction of optional predicates; an absent predicate matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    /// Exact category, compared case-insensitively
    pub category: Option<String>,
    /// Literal, case-insensitive substring of the name
    pub search: Option<String>,
}

impl ProductFilter {
    /// Empty strings count as absent.
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }
}

/// Skip/limit window of a 1-based page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl PageWindow {
    /// `skip = per_page * page - per_page`. Page 0 is read as page 1.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            skip: per_page.saturating_mul(page.max(1) - 1),
            limit: per_page,
        }
    }
}

/// Absent or non-positive pages become 1.
pub fn normalize_page(page: Option<i64>) -> u64 {
    page.unwrap_or(1).max(1).unsigned_abs()
}

/// A fully resolved product listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub page: u64,
    pub filter: ProductFilter,
    pub sort: PriceSort,
}

impl ProductQuery {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, PRODUCTS_PER_PAGE)
    }
}

impl From<ProductListParams> for ProductQuery {
    fn from(params: ProductListParams) -> Self {
        Self {
            page: normalize_page(params.page),
            sort: PriceSort::from_param(params.price.as_deref()),
            filter: ProductFilter::new(params.category, params.query),
        }
    }
}
