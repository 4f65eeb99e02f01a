//! Density providers for the sizing search.
//!
//! [`Incompressible`] is always available. [`CoolProp`] needs the `coolprop`
//! feature and a native CoolProp build.

pub mod incompressible;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

pub use incompressible::Incompressible;

#[cfg(feature = "coolprop")]
pub use coolprop::CoolProp;
