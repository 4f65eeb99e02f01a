#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pintle Sizing
//!
//! Sizing tools for liquid bipropellant pintle injectors.
//!
//! Given propellant mass flows and a chamber operating point, the sizing
//! model sweeps a discrete set of radial orifice counts, snaps each
//! theoretical orifice to a real drill size, and keeps the configurations
//! whose momentum ratios fall inside empirical acceptance windows.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models (constraints, fluid
//!   properties, drill catalogs).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
