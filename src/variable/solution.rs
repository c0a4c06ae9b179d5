//! Solution and variable-slot types.

use super::{BoundedReal, ConstellationVariable, SatelliteVariable};

/// One decision-variable slot in a [`Solution`].
///
/// A closed union over the variable kinds this crate knows. The structural
/// operators recombine `Constellation` and `Satellite` slots; a `Real`
/// slot (or any slot whose kind differs across parents) is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variable {
    /// A whole constellation (variable-length satellite list).
    Constellation(ConstellationVariable),
    /// A single satellite orbit.
    Satellite(SatelliteVariable),
    /// A plain bounded real, recombined by other operators in the loop.
    Real(BoundedReal),
}

/// Kind tag of a [`Variable`], used for slot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// Constellation-typed slot.
    Constellation,
    /// Satellite-typed slot.
    Satellite,
    /// Any other slot kind; never recombined structurally.
    Real,
}

impl Variable {
    /// The kind tag of this slot.
    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Constellation(_) => VariableKind::Constellation,
            Variable::Satellite(_) => VariableKind::Satellite,
            Variable::Real(_) => VariableKind::Real,
        }
    }

    /// The constellation held by this slot, if it is constellation-typed.
    pub fn as_constellation(&self) -> Option<&ConstellationVariable> {
        match self {
            Variable::Constellation(c) => Some(c),
            _ => None,
        }
    }

    /// The satellite held by this slot, if it is satellite-typed.
    pub fn as_satellite(&self) -> Option<&SatelliteVariable> {
        match self {
            Variable::Satellite(s) => Some(s),
            _ => None,
        }
    }
}

/// One candidate constellation design in the search population.
///
/// Holds the ordered variable slots plus objective storage for the
/// surrounding multi-objective loop. The structural operators read and
/// write `variables` only; `objectives` is copied through verbatim.
///
/// `Clone` is a deep copy: a cloned solution shares no state with its
/// original, so parents stay usable for subsequent operators.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Ordered decision-variable slots.
    pub variables: Vec<Variable>,
    /// Objective values, filled in by the evaluation layer.
    pub objectives: Vec<f64>,
}

impl Solution {
    /// Creates a solution with the given variable slots and no objectives.
    pub fn new(variables: Vec<Variable>) -> Self {
        Self {
            variables,
            objectives: Vec::new(),
        }
    }

    /// Creates a solution with objective storage of the given size.
    pub fn with_objectives(variables: Vec<Variable>, num_objectives: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; num_objectives],
        }
    }

    /// Number of variable slots.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// The variable at slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn variable(&self, index: usize) -> &Variable {
        &self.variables[index]
    }

    /// Replaces the variable at slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_variable(&mut self, index: usize, variable: Variable) {
        self.variables[index] = variable;
    }
}
