//! Payoff side definitions.
//!
//! The payoff side decides the intrinsic-value function; it is
//! orthogonal to the exercise style.

/// Side of an option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(PayoffType::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Immediate exercise payoff for given spot and strike.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            PayoffType::Call => (spot - strike).max(0.0),
            PayoffType::Put => (strike - spot).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_intrinsic() {
        assert_eq!(PayoffType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(PayoffType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(PayoffType::Call.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        assert_eq!(PayoffType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(PayoffType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_is_never_negative() {
        for payoff in [PayoffType::Call, PayoffType::Put] {
            for spot in [0.0, 50.0, 100.0, 150.0] {
                assert!(payoff.intrinsic(spot, 100.0) >= 0.0);
            }
        }
    }
}
