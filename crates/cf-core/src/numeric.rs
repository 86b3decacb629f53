use crate::CfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CfError::NonPositive { what, value: v })
    }
}

/// `n` evenly spaced samples over the closed interval `[start, stop]`.
///
/// Matches the usual inclusive-endpoint linspace: `n == 1` yields `[start]`,
/// `n == 0` yields an empty vector.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            (0..n).map(|i| start + step * i as Real).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert_eq!(ensure_positive(2.5, "mass"), Ok(2.5));
        assert!(matches!(
            ensure_positive(0.0, "mass"),
            Err(CfError::NonPositive { what: "mass", .. })
        ));
        assert!(matches!(
            ensure_positive(-1.0, "drag"),
            Err(CfError::NonPositive { what: "drag", .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "drag"),
            Err(CfError::NonFinite { .. })
        ));
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        let xs = linspace(0.0, 25.0, 2500);
        assert_eq!(xs.len(), 2500);
        assert_eq!(xs[0], 0.0);
        assert!(nearly_equal(xs[2499], 25.0, Tolerances::default()));
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_strictly_increasing(stop in 0.1_f64..100.0, n in 2_usize..5000) {
            let xs = linspace(0.0, stop, n);
            prop_assert_eq!(xs.len(), n);
            prop_assert_eq!(xs[0], 0.0);
            prop_assert!(xs.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
