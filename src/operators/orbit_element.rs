//! Structural dispatch and alignment over orbital-element variables.
//!
//! [`OrbitElementOperator`] lifts a fixed-length numeric crossover
//! ([`RealVariation`]) over whole solutions. It walks the parents' variable
//! slots, recombines the slots where every parent agrees on a
//! constellation- or satellite-typed variable, and passes everything else
//! through untouched.
//!
//! Constellations with differing satellite counts are reconciled by
//! selecting, per parent, a uniform random subset of satellites of the
//! minimum count. Satellites of a larger constellation that are not
//! selected are discarded from the output, so every child constellation
//! in one call has exactly the minimum count. Selected satellites keep
//! their original relative order; grouping across parents is purely
//! positional after selection, with no orbital matching.

use super::types::{RealVariation, Variation, VariationError};
use crate::variable::{
    BoundedReal, ConstellationVariable, SatelliteVariable, Solution, Variable, VariableKind,
    NUM_ELEMENTS,
};
use rand::seq::index;
use rand::Rng;

/// Recombines constellation- and satellite-typed variables with a
/// delegated numeric crossover.
///
/// The delegate fixes the arity `K`: every call consumes `K` parents and
/// produces `K` children. The delegate's numerics are opaque — this
/// operator only bridges between typed orbital variables and the
/// delegate's fixed-length bounded-vector contract.
///
/// # Example
///
/// ```
/// use conmop_variation::operators::{OrbitElementOperator, RealVariation, Variation};
/// use conmop_variation::variable::BoundedReal;
/// use rand::Rng;
///
/// // A delegate that returns its parents unchanged.
/// struct Identity;
///
/// impl RealVariation for Identity {
///     fn arity(&self) -> usize {
///         2
///     }
///     fn evolve<R: Rng>(
///         &self,
///         parents: &[Vec<BoundedReal>],
///         _rng: &mut R,
///     ) -> Vec<Vec<BoundedReal>> {
///         parents.to_vec()
///     }
/// }
///
/// let operator = OrbitElementOperator::new(Identity);
/// assert_eq!(operator.arity(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct OrbitElementOperator<V> {
    delegate: V,
}

impl<V: RealVariation> OrbitElementOperator<V> {
    /// Wraps a delegate numeric crossover.
    pub fn new(delegate: V) -> Self {
        Self { delegate }
    }

    /// The wrapped delegate.
    pub fn delegate(&self) -> &V {
        &self.delegate
    }

    /// Recombines one group of satellites through the delegate.
    ///
    /// Each satellite is projected into a 6-element bounded vector in the
    /// fixed order `[sma, ecc, inc, arg_per, raan, true_anom]`. The
    /// delegate's output values are written into fresh copies of the
    /// corresponding input satellites; bounds stay those of each original
    /// satellite (only values move).
    ///
    /// Fails with [`VariationError::ArityMismatch`] when
    /// `satellites.len()` differs from the delegate arity or is zero.
    pub fn evolve_satellites<R: Rng>(
        &self,
        satellites: &[SatelliteVariable],
        rng: &mut R,
    ) -> Result<Vec<SatelliteVariable>, VariationError> {
        self.check_group_size(satellites.len())?;

        let parents: Vec<Vec<BoundedReal>> =
            satellites.iter().map(|s| s.elements().to_vec()).collect();

        let offspring = self.delegate.evolve(&parents, rng);
        debug_assert_eq!(
            offspring.len(),
            satellites.len(),
            "delegate must preserve arity"
        );

        Ok(satellites
            .iter()
            .zip(offspring.iter())
            .map(|(sat, child)| {
                debug_assert_eq!(
                    child.len(),
                    NUM_ELEMENTS,
                    "delegate must preserve vector dimension"
                );
                sat.with_element_values(std::array::from_fn(|d| child[d].value))
            })
            .collect())
    }

    /// Recombines one group of constellations, reconciling satellite counts.
    ///
    /// With `m` the minimum satellite count over the group: each parent
    /// contributes `m` satellites chosen uniformly at random without
    /// replacement (in original order), aligned positionally across
    /// parents, and recombined row by row via
    /// [`evolve_satellites`](Self::evolve_satellites). Every output
    /// constellation has exactly `m` satellites; unselected satellites of
    /// larger constellations are discarded.
    ///
    /// When `m == 0` the outputs are copies of the inputs with their
    /// satellite lists cleared and the delegate is never invoked.
    ///
    /// Fails with [`VariationError::ArityMismatch`] when
    /// `constellations.len()` differs from the delegate arity or is zero.
    pub fn evolve_constellations<R: Rng>(
        &self,
        constellations: &[ConstellationVariable],
        rng: &mut R,
    ) -> Result<Vec<ConstellationVariable>, VariationError> {
        self.check_group_size(constellations.len())?;

        let m = constellations
            .iter()
            .map(ConstellationVariable::num_satellites)
            .min()
            .unwrap_or(0);

        if m == 0 {
            return Ok(constellations
                .iter()
                .map(|c| {
                    let mut out = c.clone();
                    out.satellites.clear();
                    out
                })
                .collect());
        }

        // Per parent: which m satellites participate, in original order.
        // Index selection happens before any delegate invocation, in
        // parent order.
        let selected: Vec<Vec<&SatelliteVariable>> = constellations
            .iter()
            .map(|c| {
                select_member_indices(c.num_satellites(), m, rng)
                    .into_iter()
                    .map(|j| &c.satellites[j])
                    .collect()
            })
            .collect();

        // Row r aligns the r-th selected satellite of every parent.
        let mut offspring: Vec<Vec<SatelliteVariable>> = constellations
            .iter()
            .map(|_| Vec::with_capacity(m))
            .collect();
        for r in 0..m {
            let row: Vec<SatelliteVariable> =
                selected.iter().map(|sats| *sats[r]).collect();
            for (column, sat) in offspring.iter_mut().zip(self.evolve_satellites(&row, rng)?) {
                column.push(sat);
            }
        }

        Ok(constellations
            .iter()
            .zip(offspring)
            .map(|(c, satellites)| {
                let mut out = c.clone();
                out.satellites = satellites;
                out
            })
            .collect())
    }

    fn check_group_size(&self, actual: usize) -> Result<(), VariationError> {
        let expected = self.delegate.arity();
        if actual == 0 || actual != expected {
            return Err(VariationError::ArityMismatch { expected, actual });
        }
        Ok(())
    }
}

impl<V: RealVariation> Variation for OrbitElementOperator<V> {
    fn arity(&self) -> usize {
        self.delegate.arity()
    }

    fn evolve<R: Rng>(
        &self,
        parents: &[Solution],
        rng: &mut R,
    ) -> Result<Vec<Solution>, VariationError> {
        self.check_group_size(parents.len())?;

        let num_variables = parents[0].num_variables();
        for parent in &parents[1..] {
            if parent.num_variables() != num_variables {
                return Err(VariationError::VariableCountMismatch {
                    expected: num_variables,
                    actual: parent.num_variables(),
                });
            }
        }

        let mut children: Vec<Solution> = parents.to_vec();

        for i in 0..num_variables {
            match slot_kind(parents, i) {
                Some(VariableKind::Constellation) => {
                    let input: Vec<ConstellationVariable> = parents
                        .iter()
                        .map(|p| {
                            p.variable(i)
                                .as_constellation()
                                .cloned()
                                .expect("slot classified as constellation")
                        })
                        .collect();
                    let output = self.evolve_constellations(&input, rng)?;
                    for (child, constellation) in children.iter_mut().zip(output) {
                        child.set_variable(i, Variable::Constellation(constellation));
                    }
                }
                Some(VariableKind::Satellite) => {
                    let input: Vec<SatelliteVariable> = parents
                        .iter()
                        .map(|p| {
                            *p.variable(i)
                                .as_satellite()
                                .expect("slot classified as satellite")
                        })
                        .collect();
                    let output = self.evolve_satellites(&input, rng)?;
                    for (child, satellite) in children.iter_mut().zip(output) {
                        child.set_variable(i, Variable::Satellite(satellite));
                    }
                }
                // Mixed or unsupported slot kinds stay untouched in
                // every child.
                _ => {}
            }
        }

        Ok(children)
    }
}

/// Classifies slot `i` across all parents.
///
/// Returns the common kind only when every parent agrees; any
/// disagreement yields `None` and the slot is passed through.
fn slot_kind(parents: &[Solution], i: usize) -> Option<VariableKind> {
    let mut kinds = parents.iter().map(|p| p.variable(i).kind());
    let first = kinds.next()?;
    kinds.all(|k| k == first).then_some(first)
}

/// Draws `m` distinct indices uniformly from `[0, count)`, sorted
/// ascending so that membership never reorders the chosen satellites.
fn select_member_indices<R: Rng>(count: usize, m: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(m <= count, "cannot select more members than exist");
    let mut chosen = index::sample(rng, count, m).into_vec();
    chosen.sort_unstable();
    chosen
}

// ============================================================================
// Tests
// ============================================================================
