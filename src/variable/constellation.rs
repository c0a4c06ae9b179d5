//! Constellation variable.

use super::SatelliteVariable;

/// A constellation encoded as an ordered, variable-length list of
/// satellites.
///
/// There is no invariant on satellite count across constellations: two
/// parents in the same recombination call may legitimately hold different
/// numbers of satellites. The structural operators reconcile the counts
/// (see [`OrbitElementOperator`](crate::operators::OrbitElementOperator)).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstellationVariable {
    /// Satellites in this constellation, in order.
    pub satellites: Vec<SatelliteVariable>,
}

impl ConstellationVariable {
    /// Creates a constellation from a list of satellites.
    pub fn new(satellites: Vec<SatelliteVariable>) -> Self {
        Self { satellites }
    }

    /// Number of satellites in this constellation.
    pub fn num_satellites(&self) -> usize {
        self.satellites.len()
    }

    /// Whether this constellation holds no satellites.
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::BoundedReal;

    fn sat(v: f64) -> SatelliteVariable {
        let b = BoundedReal::new(v, 0.0, 100.0);
        SatelliteVariable::new(b, b, b, b, b, b)
    }

    #[test]
    fn test_counts() {
        let c = ConstellationVariable::new(vec![sat(1.0), sat(2.0), sat(3.0)]);
        assert_eq!(c.num_satellites(), 3);
        assert!(!c.is_empty());

        let empty = ConstellationVariable::default();
        assert_eq!(empty.num_satellites(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let c = ConstellationVariable::new(vec![sat(1.0)]);
        let mut d = c.clone();
        d.satellites.clear();
        assert_eq!(c.num_satellites(), 1);
        assert_eq!(d.num_satellites(), 0);
    }
}
