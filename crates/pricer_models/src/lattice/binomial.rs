//! Cox-Ross-Rubinstein binomial tree.
//!
//! ## Parameterisation
//!
//! - dt = T / n
//! - u = exp(σ√dt), d = 1/u
//! - p = (exp(r·dt) − d) / (u − d)
//!
//! Node `i` of layer `j` sits at S·exp((2i − j)·ln u) and time j·dt.
//!
//! ## Numerical notes
//!
//! For an expiry-only exercise function the tree converges to the
//! Black-Scholes price as n → ∞. For American puts the result carries a
//! non-negative early-exercise premium over the European price. Without
//! dividends, American and European calls coincide up to discretisation
//! error.

use super::error::LatticeError;
use crate::instruments::InstrumentParams;

/// Largest supported number of time steps.
pub const MAX_DEPTH: usize = 100_000;

/// Returns `true` if `depth` lies in `[1, MAX_DEPTH]`.
#[inline]
pub fn is_valid_depth(depth: usize) -> bool {
    (1..=MAX_DEPTH).contains(&depth)
}

/// Binomial lattice of a fixed depth.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
/// use pricer_models::lattice::BinomialTree;
///
/// let params = InstrumentParams::new(50.0, 0.2, 0.5, 0.1).unwrap();
/// let tree = BinomialTree::new(500).unwrap();
///
/// // American put: exercise value is intrinsic at every node
/// let price = tree
///     .price(50.0, &params, |s, _t| (params.strike() - s).max(0.0))
///     .unwrap();
/// assert!(price > 1.70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    depth: usize,
}

impl BinomialTree {
    /// Creates a tree with `depth` time steps.
    ///
    /// # Errors
    /// Returns `LatticeError::InvalidDepth` if `depth` is zero or above
    /// [`MAX_DEPTH`].
    pub fn new(depth: usize) -> Result<Self, LatticeError> {
        if !is_valid_depth(depth) {
            return Err(LatticeError::InvalidDepth { depth });
        }
        Ok(Self { depth })
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Prices by backward induction.
    ///
    /// `exercise(spot, t)` is evaluated at every node; the terminal layer
    /// is called with `t` equal to `params.expiry()` exactly, so an
    /// expiry-only policy may compare with `==`. Interior layers use
    /// `t = j·dt < T`.
    ///
    /// # Errors
    /// - `LatticeError::InvalidSpot` if `spot` is non-positive or not finite
    /// - `LatticeError::InvalidProbability` if the risk-neutral probability
    ///   falls outside [0, 1]
    pub fn price<F>(
        &self,
        spot: f64,
        params: &InstrumentParams,
        exercise: F,
    ) -> Result<f64, LatticeError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(LatticeError::InvalidSpot { spot });
        }

        let n = self.depth;
        let expiry = params.expiry();
        let rate = params.rate();
        let dt = expiry / n as f64;
        let u = (params.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = ((rate * dt).exp() - d) / (u - d);
        if !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::InvalidProbability { probability: p });
        }

        let ln_u = u.ln();
        let discount = (-rate * dt).exp();
        let node_spot = |i: usize, j: usize| spot * ((2.0 * i as f64 - j as f64) * ln_u).exp();

        // Terminal layer; the buffer is reused in place for every earlier layer.
        let mut values: Vec<f64> = (0..=n).map(|i| exercise(node_spot(i, n), expiry)).collect();

        for j in (0..n).rev() {
            let t = j as f64 * dt;
            for i in 0..=j {
                let continuation = discount * (p * values[i + 1] + (1.0 - p) * values[i]);
                values[i] = exercise(node_spot(i, j), t).max(continuation);
            }
        }

        Ok(values[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;

    fn params() -> InstrumentParams {
        InstrumentParams::new(50.0, 0.2, 0.5, 0.1).unwrap()
    }

    fn european_call(p: &InstrumentParams) -> impl Fn(f64, f64) -> f64 + '_ {
        move |s, t| {
            if t == p.expiry() {
                (s - p.strike()).max(0.0)
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            BinomialTree::new(0),
            Err(LatticeError::InvalidDepth { depth: 0 })
        );
    }

    #[test]
    fn test_depth_ceiling() {
        assert!(BinomialTree::new(MAX_DEPTH).is_ok());
        assert_eq!(
            BinomialTree::new(MAX_DEPTH + 1),
            Err(LatticeError::InvalidDepth {
                depth: MAX_DEPTH + 1
            })
        );
        assert!(matches!(
            BinomialTree::new(usize::MAX),
            Err(LatticeError::InvalidDepth { .. })
        ));
    }

    #[test]
    fn test_invalid_spot_rejected() {
        let p = params();
        let tree = BinomialTree::new(10).unwrap();
        assert!(matches!(
            tree.price(0.0, &p, european_call(&p)),
            Err(LatticeError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_single_step_by_hand() {
        let p = params();
        let tree = BinomialTree::new(1).unwrap();
        let price = tree.price(50.0, &p, european_call(&p)).unwrap();

        let u = (0.2 * 0.5_f64.sqrt()).exp();
        let d = 1.0 / u;
        let q = ((0.1 * 0.5_f64).exp() - d) / (u - d);
        let expected = (-0.1 * 0.5_f64).exp() * q * (50.0 * u - 50.0);
        assert_relative_eq!(price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_european_exercise_converges_to_closed_form() {
        let p = params();
        let reference = BlackScholes::new(50.0, 0.1, 0.2).unwrap().price_call(50.0, 0.5);

        let errors: Vec<f64> = [50, 500, 5000]
            .iter()
            .map(|&n| {
                let price = BinomialTree::new(n)
                    .unwrap()
                    .price(50.0, &p, european_call(&p))
                    .unwrap();
                (price - reference).abs()
            })
            .collect();

        assert!(errors[1] < errors[0], "errors: {:?}", errors);
        assert!(errors[2] < errors[1], "errors: {:?}", errors);
        assert!(errors[2] < 1e-3);
    }

    #[test]
    fn test_american_put_exceeds_european_put() {
        let p = params();
        let tree = BinomialTree::new(500).unwrap();
        let american = tree
            .price(50.0, &p, |s, _| (p.strike() - s).max(0.0))
            .unwrap();
        let european = BlackScholes::new(50.0, 0.1, 0.2).unwrap().price_put(50.0, 0.5);
        assert!(american >= european);
    }

    #[test]
    fn test_non_negative_for_standard_payoffs() {
        let p = params();
        let tree = BinomialTree::new(100).unwrap();
        for spot in [1.0, 25.0, 50.0, 75.0, 500.0] {
            let call = tree.price(spot, &p, european_call(&p)).unwrap();
            let put = tree.price(spot, &p, |s, _| (p.strike() - s).max(0.0)).unwrap();
            assert!(call >= 0.0);
            assert!(put >= 0.0);
        }
    }

    #[test]
    fn test_coarse_step_with_high_rate_rejected() {
        // σ√dt small relative to r·dt pushes p above one
        let p = InstrumentParams::new(50.0, 0.01, 1.0, 0.5).unwrap();
        let tree = BinomialTree::new(1).unwrap();
        assert!(matches!(
            tree.price(50.0, &p, |s, _| (s - 50.0).max(0.0)),
            Err(LatticeError::InvalidProbability { .. })
        ));
    }
}
