//! Liquid rocket propulsion models.

pub mod pintle;
