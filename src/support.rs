//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric bounds for validated inputs.
//! - [`drill`]: Catalogs of manufactured drill diameters.
//! - [`thermo`]: Propellant property models.

pub mod constraint;
pub mod drill;
pub mod thermo;
