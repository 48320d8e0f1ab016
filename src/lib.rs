//! Rvehom computes homogenized material properties of representative volume elements (RVEs)
//!
//! The input is a set of per-load-step tensor measurements produced by a finite
//! element simulation of an RVE: strain/stress pairs for elasticity or
//! temperature-gradient/heat-flux pairs for thermal conductivity. From these,
//! the crate reconstructs the macroscopic stiffness (or conductivity) tensor by
//! a least-squares solve based on the singular value decomposition, and derives
//! isotropic elastic constants using the Voigt, Reuss, and Hill averages.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod homogenization;
pub mod util;
