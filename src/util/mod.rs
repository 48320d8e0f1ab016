//! Implements records to collect and persist homogenization results

mod results;
pub use crate::util::results::*;
