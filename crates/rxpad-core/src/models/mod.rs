//! Domain models for prescription drafting.

mod medication;
mod prescription;
mod template;
mod validation;

pub use medication::*;
pub use prescription::*;
pub use template::*;
pub use validation::*;
