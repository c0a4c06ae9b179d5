//! Decision-variable data model for constellation-design solutions.
//!
//! A [`Solution`] is an ordered sequence of [`Variable`] slots. Each slot
//! holds one of a closed set of kinds:
//!
//! - [`ConstellationVariable`]: a variable-length list of satellites
//! - [`SatelliteVariable`]: one satellite's orbit as six bounded reals
//! - [`BoundedReal`]: a plain bounded real value (passed through untouched
//!   by the structural operators)
//!
//! All types are plain owned data: `Clone` is a deep copy, so cloning a
//! parent solution yields a fully independent child. The `lower ≤ value ≤
//! upper` relation on [`BoundedReal`] is the intended invariant but is not
//! re-validated after recombination — the delegate numeric operator is
//! trusted (see the [`operators`](crate::operators) module docs).

mod bounded;
mod constellation;
mod satellite;
mod solution;

pub use bounded::BoundedReal;
pub use constellation::ConstellationVariable;
pub use satellite::SatelliteVariable;
pub use solution::{Solution, Variable, VariableKind};

pub(crate) use satellite::NUM_ELEMENTS;
