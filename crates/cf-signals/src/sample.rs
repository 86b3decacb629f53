//! Grid sampling of scalar signals.

use cf_core::Real;
use rayon::prelude::*;

/// Evaluate `f` at every sample of `t`.
pub fn sample<F>(f: F, t: &[Real]) -> Vec<Real>
where
    F: Fn(Real) -> Real,
{
    t.iter().map(|&ti| f(ti)).collect()
}

/// Parallel variant of [`sample`]. Samples are independent, so the output is
/// identical to the serial path.
pub fn sample_par<F>(f: F, t: &[Real]) -> Vec<Real>
where
    F: Fn(Real) -> Real + Sync + Send,
{
    t.par_iter().map(|&ti| f(ti)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::Profile;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sampling_is_elementwise(ts in prop::collection::vec(-5.0_f64..60.0, 0..200)) {
            for p in Profile::ALL {
                let f = p.as_fn();
                let grid_vals = sample(f, &ts);
                let par_vals = sample_par(f, &ts);
                let point_vals: Vec<Real> = ts.iter().map(|&t| p.eval(t)).collect();
                prop_assert_eq!(&grid_vals, &point_vals);
                prop_assert_eq!(&par_vals, &point_vals);
            }
        }
    }
}
