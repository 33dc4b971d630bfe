//! Reference data document, catalog filters, and the filter/sort view.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use monsoon_core::{Category, Money, Product};

/// Default price ceiling for the catalog filter, in minor units.
pub const DEFAULT_PRICE_CEILING: Money = Money::from_minor(15_000_000);

/// Errors reading or parsing the reference data document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document could not be read from disk.
    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The static reference data document: `{ categories, products }`.
///
/// Absent fields default to empty lists, so a partially-shaped document
/// loads as an empty catalog rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogDocument {
    /// Parse a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the input is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the file cannot be read, or
    /// [`CatalogError::Parse`] if it is not valid JSON.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

/// Sort modes for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Input order, no reordering.
    #[default]
    Featured,
    /// Price ascending.
    PriceAsc,
    /// Price descending.
    PriceDesc,
    /// Rating descending.
    Rating,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort mode: {s}")),
        }
    }
}

/// Transient catalog filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilters {
    /// Substring search over name and description, case-insensitive.
    pub search: String,
    /// Category display name, `None` for all categories.
    pub category: Option<String>,
    /// Maximum price, inclusive.
    pub max_price: Money,
    /// Minimum rating, inclusive.
    pub min_rating: f64,
    /// Sort mode for the filtered list.
    pub sort: SortMode,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            max_price: DEFAULT_PRICE_CEILING,
            min_rating: 0.0,
            sort: SortMode::Featured,
        }
    }
}

/// A single filter-field overwrite.
///
/// Tagged per field so updates resolve by exhaustive match rather than
/// string-keyed access.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Search(String),
    Category(Option<String>),
    MaxPrice(Money),
    MinRating(f64),
    Sort(SortMode),
}

impl CatalogFilters {
    /// Overwrite one filter field.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Search(search) => self.search = search,
            FilterUpdate::Category(category) => self.category = category,
            FilterUpdate::MaxPrice(max_price) => self.max_price = max_price,
            FilterUpdate::MinRating(min_rating) => self.min_rating = min_rating,
            FilterUpdate::Sort(sort) => self.sort = sort,
        }
    }
}

/// Filter and sort the product list for display.
///
/// Retains products matching the selected category (if any), a
/// case-insensitive substring of name or description (if the search is
/// non-blank), price at most the ceiling, and rating at least the floor;
/// then orders per the sort mode. Sorting is stable, so products equal
/// under the compared field keep their input order, and
/// [`SortMode::Featured`] preserves input order entirely.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filters: &CatalogFilters) -> Vec<&'a Product> {
    let needle = filters.search.trim().to_lowercase();

    let mut output: Vec<&Product> = products
        .iter()
        .filter(|product| {
            let matches_category = filters
                .category
                .as_deref()
                .is_none_or(|category| product.category == category);
            let matches_search = needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            let within_price = product.price <= filters.max_price;
            let meets_rating = product.rating >= filters.min_rating;
            matches_category && matches_search && within_price && meets_rating
        })
        .collect();

    match filters.sort {
        SortMode::Featured => {}
        SortMode::PriceAsc => output.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => output.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Rating => output.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    output
}
