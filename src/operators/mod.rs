//! Variation layer: structural recombination over heterogeneous solutions.
//!
//! # Core Traits
//!
//! - [`Variation`]: the operator surface exposed to the evolutionary loop —
//!   fixed arity, whole-solution in/out
//! - [`RealVariation`]: the delegate contract — fixed-arity, fixed-dimension
//!   bounded-real-vector crossover, treated as an opaque black box
//!
//! # Key Types
//!
//! - [`OrbitElementOperator`]: wraps a [`RealVariation`] delegate and lifts
//!   it over constellation- and satellite-typed variable slots
//! - [`VariationError`]: invalid-argument failures (arity and variable-count
//!   mismatches); propagated to the caller, never recovered locally
//!
//! Mixed or unsupported slot kinds are not errors: they pass through
//! unchanged in every child. Out-of-bound values produced by the delegate
//! are likewise not validated or clamped — callers that need strict bound
//! enforcement wrap the delegate.

mod orbit_element;
mod types;

pub use orbit_element::OrbitElementOperator;
pub use types::{RealVariation, Variation, VariationError};
