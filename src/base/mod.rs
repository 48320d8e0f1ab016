//! Implements the data model for tensor measurements and load steps

mod constants;
mod samples;
mod tensor3;
mod tensor6;
pub use crate::base::constants::*;
pub use crate::base::samples::*;
pub use crate::base::tensor3::*;
pub use crate::base::tensor6::*;
