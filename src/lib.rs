//! Structural recombination operators for satellite-constellation design.
//!
//! In a population-based multi-objective search over constellation designs,
//! each candidate solution is an ordered sequence of heterogeneous decision
//! variables: some slots hold a whole constellation (a variable-length list
//! of satellites), others hold a single satellite's orbit as six bounded
//! real values. A generic numeric crossover only knows how to recombine
//! fixed-length real vectors, so this crate provides the structural bridge:
//!
//! - **Classification**: per variable slot, determine whether every parent
//!   agrees on a constellation-typed or satellite-typed slot; anything
//!   mixed or unsupported is passed through untouched.
//! - **Alignment**: reduce variable-cardinality constellations to a common
//!   minimal satellite count by uniform random selection without
//!   replacement, then group satellites across parents positionally.
//! - **Delegation**: project each group of satellites into fixed-length
//!   bounded real vectors, hand them to a pluggable numeric operator, and
//!   reassemble well-typed child solutions.
//!
//! # Modules
//!
//! - [`variable`]: the decision-variable data model — [`variable::BoundedReal`],
//!   [`variable::SatelliteVariable`], [`variable::ConstellationVariable`],
//!   [`variable::Variable`], [`variable::Solution`].
//! - [`operators`]: the variation layer — [`operators::Variation`],
//!   [`operators::RealVariation`], [`operators::OrbitElementOperator`].
//! - [`random`]: seeded RNG construction for reproducible runs.
//!
//! The evolutionary loop itself (selection, replacement, termination),
//! fitness evaluation (orbit propagation, coverage), and the numeric
//! crossover algorithm are external collaborators, not part of this crate.

pub mod operators;
pub mod random;
pub mod variable;
