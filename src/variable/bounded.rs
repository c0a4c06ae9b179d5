//! Bounded real value.

/// A real value with an inclusive `[lower, upper]` bound.
///
/// `lower <= value <= upper` is the intended invariant, but it is **not**
/// enforced after recombination: the delegate numeric operator is trusted
/// to respect bounds, and a caller that needs strict enforcement wraps the
/// delegate. Bounds travel with the value as metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedReal {
    /// Current value.
    pub value: f64,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl BoundedReal {
    /// Creates a bounded real.
    ///
    /// # Panics
    /// Panics if `lower > upper`.
    pub fn new(value: f64, lower: f64, upper: f64) -> Self {
        assert!(lower <= upper, "lower bound must not exceed upper bound");
        Self {
            value,
            lower,
            upper,
        }
    }

    /// Returns a copy with a new value and the same bounds.
    pub fn with_value(&self, value: f64) -> Self {
        Self { value, ..*self }
    }

    /// Whether the value currently lies within its bounds.
    pub fn in_bounds(&self) -> bool {
        self.lower <= self.value && self.value <= self.upper
    }
}
