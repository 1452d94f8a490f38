//! Tree transformations for Arbor expression trees.
//!
//! This crate defines the transformation protocol and the two shipped
//! transformations: deep copy and constant folding.

mod copy;
mod fold;
mod transform;

pub use copy::DeepCopy;
pub use fold::ConstFold;
pub use transform::{Transform, transform};
