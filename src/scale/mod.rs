//! Letter grade scale rescaling.

pub mod rescale;

pub use rescale::*;
