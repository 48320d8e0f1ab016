//! Implements the numerical homogenization engine
//!
//! The engine has two parts. The reconstruction functions take matched pairs
//! of driving/response tensor measurements (strain/stress or temperature
//! gradient/heat flux) and solve for the material tensor relating them via a
//! least-squares solve based on the singular value decomposition. The
//! averaging functions then derive isotropic elastic constants from a
//! reconstructed stiffness tensor using the classical Voigt, Reuss, and Hill
//! estimates.

mod averaging;
mod conductivity;
mod stiffness;
pub use crate::homogenization::averaging::*;
pub use crate::homogenization::conductivity::*;
pub use crate::homogenization::stiffness::*;
