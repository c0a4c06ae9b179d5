//! Core trait definitions for the variation layer.
//!
//! [`Variation`] is what the surrounding evolutionary loop calls;
//! [`RealVariation`] is what this crate consumes — the pluggable numeric
//! crossover that only understands fixed-length bounded real vectors.

use crate::variable::{BoundedReal, Solution};
use rand::Rng;
use thiserror::Error;

/// Invalid-argument failures raised by the variation layer.
///
/// All failures are deterministic functions of malformed input; there are
/// no retries. The evolutionary-loop caller decides whether to discard the
/// offending solutions or abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariationError {
    /// The number of supplied parents does not match the operator's arity.
    #[error("arity mismatch: operator expects {expected} parents, got {actual}")]
    ArityMismatch {
        /// Arity of the operator (and its delegate).
        expected: usize,
        /// Number of parents actually supplied.
        actual: usize,
    },

    /// Parents disagree on the number of variable slots.
    #[error("variable count mismatch: expected {expected} variables, got {actual}")]
    VariableCountMismatch {
        /// Variable count of the first parent.
        expected: usize,
        /// Conflicting variable count found in a later parent.
        actual: usize,
    },
}

/// A whole-solution variation operator, as seen by the evolutionary loop.
///
/// An operator has a fixed arity `K`: it consumes exactly `K` parent
/// solutions and produces exactly `K` children. Parents are read-only;
/// children are newly allocated and independently owned.
pub trait Variation {
    /// Number of parent solutions this operator consumes (and children it
    /// produces) per call.
    fn arity(&self) -> usize;

    /// Recombines `parents` into the same number of new child solutions.
    ///
    /// Fails with [`VariationError::ArityMismatch`] when
    /// `parents.len() != self.arity()`.
    fn evolve<R: Rng>(
        &self,
        parents: &[Solution],
        rng: &mut R,
    ) -> Result<Vec<Solution>, VariationError>;
}

/// The delegate numeric crossover contract.
///
/// Given `K` fixed-length vectors of bounded reals (same dimension `D`
/// for every vector in one call), returns `K` vectors of the same
/// dimension. The algorithm inside is opaque to this crate: simulated
/// binary crossover, blend crossover, differential variation — anything
/// that honors the shape contract. Implementations are arity-preserving
/// and must not assume any particular `D`.
///
/// Bound metadata travels with each element so bound-aware delegates can
/// use it; this crate does not check the returned values against it.
pub trait RealVariation {
    /// Number of parent vectors consumed (and child vectors produced) per
    /// call.
    fn arity(&self) -> usize;

    /// Recombines `parents` into the same number of child vectors, each
    /// with the dimension of its input.
    fn evolve<R: Rng>(&self, parents: &[Vec<BoundedReal>], rng: &mut R) -> Vec<Vec<BoundedReal>>;
}
