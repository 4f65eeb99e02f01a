use thiserror::Error;

/// Errors that can occur while building a [`DrillCatalog`](super::DrillCatalog).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// No usable drill diameters remained after filtering.
    #[error("drill catalog has no usable diameters")]
    Empty,

    /// The header row does not contain the requested column.
    #[error("drill catalog has no column named {column:?}")]
    MissingColumn { column: String },

    /// The catalog source could not be read.
    #[error("failed to read drill catalog")]
    Io(#[from] std::io::Error),
}
