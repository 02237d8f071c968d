/// A closed range of ray parameters.
///
/// Intersection routines accept a hit at `t` only if the search interval
/// `surrounds` it, so the lower bound doubles as the self-intersection
/// epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Everything strictly in front of a ray origin, past [`crate::EPSILON`].
    pub const FORWARD: Interval = Interval::new(crate::EPSILON, f64::INFINITY);

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
    }

    #[test]
    fn test_forward_rejects_self_hits() {
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(!Interval::FORWARD.surrounds(crate::EPSILON / 2.0));
        assert!(Interval::FORWARD.surrounds(1.0));
        assert!(!Interval::FORWARD.with_max(1.0).surrounds(2.0));
    }
}
