//! Product catalog mapping refrigerated products to their storage temperature.
//!
//! The catalog is immutable once built and is shared between refrigerated
//! containers through an [`Arc`]. A built-in table covers the standard
//! product range; alternative tables can be loaded from CSV.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Similarity threshold for "did you mean" suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.7;
/// Maximum number of suggestions attached to an unknown-product error.
const MAX_SUGGESTIONS: usize = 3;

/// Built-in product table in degrees Celsius.
const BUILTIN_PRODUCTS: &[(&str, f64)] = &[
    ("Bananas", 13.3),
    ("Chocolate", 18.0),
    ("Fish", -15.0),
    ("Meat", -15.0),
    ("Ice cream", -18.0),
    ("Frozen pizza", -30.0),
    ("Cheese", 7.2),
    ("Sausages", 5.0),
    ("Butter", 20.5),
    ("Eggs", 19.0),
];

static BUILTIN_CATALOG: Lazy<Arc<ProductCatalog>> = Lazy::new(|| {
    let products = BUILTIN_PRODUCTS
        .iter()
        .map(|&(name, temperature_c)| Product::new(name, temperature_c));
    Arc::new(ProductCatalog::from_products(products).expect("built-in product table is valid"))
});

/// A refrigerated product and the temperature it must be kept at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub temperature_c: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, temperature_c: f64) -> Self {
        Self {
            name: name.into(),
            temperature_c,
        }
    }

    /// Validate product attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ProductDataValidation {
                message: "product name must not be empty".to_string(),
            });
        }
        if !self.temperature_c.is_finite() {
            return Err(Error::ProductDataValidation {
                message: format!("temperature for '{}' must be finite", self.name),
            });
        }
        Ok(())
    }
}

/// Collection of product definitions keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
    source: Option<PathBuf>,
}

impl ProductCatalog {
    /// The shared built-in catalog.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Build a catalog from already-parsed products.
    pub fn from_products<I>(products: I) -> Result<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut catalog = Self::default();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Load a product catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a product catalog from a reader (e.g., file or in-memory buffer).
    ///
    /// Expects a header row naming a product column (`product`, `name`,
    /// `product_type`) and a temperature column (`temperature_c`,
    /// `temperature`, `temp`).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ProductDataValidation {
                message: format!("failed to read product catalog headers: {err}"),
            })?
            .clone();

        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |alternatives: &[&str]| {
            alternatives
                .iter()
                .find_map(|alt| normalized.iter().position(|h| h.as_str() == *alt))
        };

        let name_idx = find(&["product", "name", "product_type", "producttype"]);
        let temp_idx = find(&["temperature_c", "temperature", "temp", "temp_c"]);
        let (name_idx, temp_idx) = match (name_idx, temp_idx) {
            (Some(n), Some(t)) => (n, t),
            _ => {
                return Err(Error::ProductDataValidation {
                    message: format!(
                        "product catalog requires product and temperature columns. Available: {}",
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                })
            }
        };

        let mut catalog = Self::default();
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::ProductDataValidation {
                message: e.to_string(),
            })?;

            let name = record.get(name_idx).unwrap_or_default().to_string();
            let temperature_c = record
                .get(temp_idx)
                .unwrap_or_default()
                .parse::<f64>()
                .map_err(|e| Error::ProductDataValidation {
                    message: format!("invalid temperature for product '{name}' at row {row}: {e}"),
                })?;

            catalog.insert(Product::new(name, temperature_c))?;
        }

        Ok(catalog)
    }

    fn insert(&mut self, mut product: Product) -> Result<()> {
        product.name = product.name.trim().to_string();
        product.validate()?;

        let key = normalize_name(&product.name);
        if self.products.contains_key(&key) {
            return Err(Error::DuplicateProduct { name: key });
        }
        self.products.insert(key, product);
        Ok(())
    }

    /// Get a product by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(&normalize_name(name))
    }

    /// Get a product by name, failing with suggestions when it is unknown.
    pub fn require(&self, name: &str) -> Result<&Product> {
        self.get(name).ok_or_else(|| Error::UnknownProduct {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, MAX_SUGGESTIONS),
        })
    }

    /// Product names most similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .products
            .iter()
            .map(|(key, product)| (strsim::jaro_winkler(&needle, key), product.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Get a sorted list of all product names.
    pub fn product_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.products.values().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all products sorted by name.
    pub fn products_sorted(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a product name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
