//! Satellite orbit variable.

use super::BoundedReal;

/// Number of orbital elements in a [`SatelliteVariable`].
pub(crate) const NUM_ELEMENTS: usize = 6;

/// One satellite's orbit encoded as six bounded Keplerian elements.
///
/// Field order is fixed throughout the crate:
/// `[sma, ecc, inc, arg_per, raan, true_anom]`. This is the order in which
/// the elements are projected into real vectors for the delegate numeric
/// operator and read back out of its results.
///
/// Every recombination produces new instances; parent satellites are never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SatelliteVariable {
    /// Semi-major axis.
    pub sma: BoundedReal,
    /// Eccentricity.
    pub ecc: BoundedReal,
    /// Inclination.
    pub inc: BoundedReal,
    /// Argument of perigee.
    pub arg_per: BoundedReal,
    /// Right ascension of the ascending node.
    pub raan: BoundedReal,
    /// True anomaly.
    pub true_anom: BoundedReal,
}

impl SatelliteVariable {
    /// Creates a satellite from its six elements, in fixed field order.
    pub fn new(
        sma: BoundedReal,
        ecc: BoundedReal,
        inc: BoundedReal,
        arg_per: BoundedReal,
        raan: BoundedReal,
        true_anom: BoundedReal,
    ) -> Self {
        Self {
            sma,
            ecc,
            inc,
            arg_per,
            raan,
            true_anom,
        }
    }

    /// Projects the orbit into its six bounded elements, in fixed order.
    pub fn elements(&self) -> [BoundedReal; NUM_ELEMENTS] {
        [
            self.sma,
            self.ecc,
            self.inc,
            self.arg_per,
            self.raan,
            self.true_anom,
        ]
    }

    /// Returns a copy with the six element *values* replaced, in fixed
    /// order, and every bound kept from this satellite.
    pub fn with_element_values(&self, values: [f64; NUM_ELEMENTS]) -> Self {
        Self {
            sma: self.sma.with_value(values[0]),
            ecc: self.ecc.with_value(values[1]),
            inc: self.inc.with_value(values[2]),
            arg_per: self.arg_per.with_value(values[3]),
            raan: self.raan.with_value(values[4]),
            true_anom: self.true_anom.with_value(values[5]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_satellite() -> SatelliteVariable {
        SatelliteVariable::new(
            BoundedReal::new(7000.0, 6600.0, 8000.0),
            BoundedReal::new(0.01, 0.0, 0.3),
            BoundedReal::new(0.9, 0.0, 3.2),
            BoundedReal::new(1.0, 0.0, 6.3),
            BoundedReal::new(2.0, 0.0, 6.3),
            BoundedReal::new(3.0, 0.0, 6.3),
        )
    }

    #[test]
    fn test_elements_order() {
        let sat = sample_satellite();
        let e = sat.elements();
        assert_eq!(e[0], sat.sma);
        assert_eq!(e[1], sat.ecc);
        assert_eq!(e[2], sat.inc);
        assert_eq!(e[3], sat.arg_per);
        assert_eq!(e[4], sat.raan);
        assert_eq!(e[5], sat.true_anom);
    }

    #[test]
    fn test_with_element_values_keeps_bounds() {
        let sat = sample_satellite();
        let out = sat.with_element_values([7500.0, 0.02, 1.0, 1.5, 2.5, 3.5]);

        assert_eq!(out.sma.value, 7500.0);
        assert_eq!(out.true_anom.value, 3.5);
        // bounds are the original satellite's
        assert_eq!(out.sma.lower, sat.sma.lower);
        assert_eq!(out.sma.upper, sat.sma.upper);
        assert_eq!(out.ecc.lower, sat.ecc.lower);
        assert_eq!(out.ecc.upper, sat.ecc.upper);
        // original untouched
        assert_eq!(sat.sma.value, 7000.0);
    }

    #[test]
    fn test_round_trip_through_elements() {
        let sat = sample_satellite();
        let values: Vec<f64> = sat.elements().iter().map(|e| e.value).collect();
        let out = sat.with_element_values(values.try_into().unwrap());
        assert_eq!(out, sat);
    }
}
