//! Catalogs of manufactured drill sizes.
//!
//! Orifices can only be drilled at the diameters a shop actually stocks, so
//! the sizing search snaps every theoretical diameter to the nearest entry of
//! a [`DrillCatalog`].
//!
//! # Example
//!
//! ```
//! use pintle_sizing::support::drill::DrillCatalog;
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let csv = "Bit name,Bits in millimeters\n#60,1.016\nsmall,\n#56,1.1811\n1/16,1.5875\n";
//! let catalog = DrillCatalog::from_csv(csv.as_bytes(), DrillCatalog::DEFAULT_COLUMN).unwrap();
//!
//! assert_eq!(catalog.len(), 3);
//! let snapped = catalog.nearest(Length::new::<millimeter>(1.2));
//! assert!((snapped.get::<millimeter>() - 1.1811).abs() < 1e-12);
//! ```

mod csv;
mod error;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use uom::si::{f64::Length, length::millimeter};

pub use error::CatalogError;

/// An ascending, deduplicated set of drill diameters.
///
/// A catalog is never empty: every constructor returns
/// [`CatalogError::Empty`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillCatalog {
    diameters: Vec<Length>,
}

impl DrillCatalog {
    /// Column read by the bundled drill tables.
    pub const DEFAULT_COLUMN: &'static str = "Bits in millimeters";

    /// Builds a catalog from diameters in any order.
    ///
    /// Non-finite and non-positive diameters are dropped and duplicates are
    /// collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if no usable diameter remains.
    pub fn new(diameters: impl IntoIterator<Item = Length>) -> Result<Self, CatalogError> {
        let mut diameters: Vec<Length> = diameters
            .into_iter()
            .filter(|d| d.value.is_finite() && d.value > 0.0)
            .collect();

        diameters.sort_by(|a, b| a.value.total_cmp(&b.value));
        diameters.dedup_by(|a, b| a.value == b.value);

        if diameters.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::debug!(
            sizes = diameters.len(),
            min_mm = diameters[0].get::<millimeter>(),
            max_mm = diameters[diameters.len() - 1].get::<millimeter>(),
            "loaded drill catalog"
        );

        Ok(Self { diameters })
    }

    /// Builds a catalog from diameters given in millimeters.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if no usable diameter remains.
    pub fn from_millimeters(values: impl IntoIterator<Item = f64>) -> Result<Self, CatalogError> {
        Self::new(values.into_iter().map(Length::new::<millimeter>))
    }

    /// Reads a catalog from CSV text with a header row.
    ///
    /// Values in `column` are millimeters. Blank cells, rows too short to
    /// reach the column, and cells that don't parse as numbers are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if reading fails, the column is missing, or
    /// no usable diameter remains.
    pub fn from_csv(reader: impl BufRead, column: &str) -> Result<Self, CatalogError> {
        let values = csv::read_column(reader, column)?;
        Self::from_millimeters(values)
    }

    /// Reads a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// See [`DrillCatalog::from_csv`].
    pub fn from_path(path: impl AsRef<Path>, column: &str) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_csv(BufReader::new(file), column)
    }

    /// Returns the catalog diameter closest to `target`.
    ///
    /// When `target` lies exactly halfway between two sizes, the smaller one
    /// is returned.
    #[must_use]
    pub fn nearest(&self, target: Length) -> Length {
        let upper = self.diameters.partition_point(|d| *d < target);

        if upper == 0 {
            return self.diameters[0];
        }
        if upper == self.diameters.len() {
            return self.diameters[upper - 1];
        }

        let below = self.diameters[upper - 1];
        let above = self.diameters[upper];
        if target - below <= above - target {
            below
        } else {
            above
        }
    }

    /// Number of distinct diameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diameters.len()
    }

    /// Returns `true` if the catalog holds no diameters, which construction rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diameters.is_empty()
    }

    /// Smallest diameter in the catalog.
    #[must_use]
    pub fn min(&self) -> Length {
        self.diameters[0]
    }

    /// Largest diameter in the catalog.
    #[must_use]
    pub fn max(&self) -> Length {
        self.diameters[self.diameters.len() - 1]
    }

    /// Returns `true` if `diameter` is exactly one of the catalog sizes.
    #[must_use]
    pub fn contains(&self, diameter: Length) -> bool {
        self.diameters
            .binary_search_by(|d| d.value.total_cmp(&diameter.value))
            .is_ok()
    }

    /// Iterates over the diameters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Length> + '_ {
        self.diameters.iter().copied()
    }
}
