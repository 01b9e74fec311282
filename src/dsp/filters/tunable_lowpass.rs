use std::f64::consts::PI;

use ndarray_linalg::LeastSquaresSvdInto;

use crate::prelude::{ErrorsTLPF, R1D, R2D};

/// Least-squares design of a symmetric, constant-delay FIR lowpass whose
/// taps are affine in the cutoff frequency.
///
/// A linear-phase filter of length `2*delay + 1` with `h[i] = h[len-1-i]`
/// has the purely real response
/// `H(e^jw) = h[delay] + 2 * sum_k h[delay-k] * cos(w*k)`,
/// so each one-sided tap only ever multiplies `cos(w*k)`. Writing tap `k`
/// (counted outward from the center) as `a[2k] + a[2k+1]*c`, where `c` is
/// the cutoff in rad/sample, each sampled (cutoff, test frequency) pair
/// contributes one row `[cos(w*k), c*cos(w*k), ...]` against a brick-wall
/// target of `1` below the cutoff and `0` above it. The factor of 2 that
/// the mirrored taps contribute is left out of the matrix and folded into
/// the solution afterwards.
///
/// `cutoff_grid` and `test_grid` set the sampling resolution: cutoffs are
/// midpoint-sampled at `(i + 0.5)/cutoff_grid * pi` for `i = 0..=cutoff_grid`
/// and test frequencies at `j/test_grid * pi` for `j = 0..=test_grid`.
/// For a fully determined system the row count
/// `(cutoff_grid + 1) * (test_grid + 1)` should be at least `2*(delay + 1)`;
/// this is not enforced, and an under-determined system still yields the
/// minimum-norm solution of the SVD-based solver.
///
/// Returns `2*(delay + 1)` values: entry `2k` is the constant term and
/// entry `2k+1` the cutoff-linear term of one-sided tap `k`, tap 0 being
/// the center tap.
pub fn tunable_lowpass(
    delay: usize,
    cutoff_grid: usize,
    test_grid: usize,
) -> Result<Vec<f64>, ErrorsTLPF> {
    if delay == 0 {
        return Err(ErrorsTLPF::InvalidInputRange(
            "delay must be >= 1; a single-tap filter has no off-center tap for the cutoff term",
        ));
    }
    if cutoff_grid == 0 || test_grid == 0 {
        return Err(ErrorsTLPF::InvalidInputRange(
            "cutoff_grid and test_grid must be >= 1",
        ));
    }

    let half_length = delay + 1;
    let n_unknowns = 2 * half_length;
    let n_rows = (cutoff_grid + 1) * (test_grid + 1);

    let mut mat = R2D::zeros((n_rows, n_unknowns));
    let mut rhs = R1D::zeros(n_rows);
    let mut row = 0;
    for ci in 0..=cutoff_grid {
        let cutoff = (ci as f64 + 0.5) / cutoff_grid as f64 * PI;
        for j in 0..=test_grid {
            let w = j as f64 / test_grid as f64 * PI;
            rhs[row] = if w < cutoff { 1.0 } else { 0.0 };
            for k in 0..half_length {
                let basis = (w * k as f64).cos();
                mat[[row, 2 * k]] = basis;
                mat[[row, 2 * k + 1]] = cutoff * basis;
            }
            row += 1;
        }
    }

    let sol = mat.least_squares_into(rhs).map_err(|_| {
        ErrorsTLPF::RuntimeError("SVD least-squares solve failed on the design system")
    })?;

    let mut coeffs = sol.solution.to_vec();
    // Fold the deferred symmetric-pair factor back in; the center tap
    // (entries 0 and 1) has no mirror partner.
    for v in coeffs.iter_mut().skip(2) {
        *v *= 0.5;
    }
    Ok(coeffs)
}

/// Evaluate the affine coefficient pairs at a concrete cutoff and mirror
/// the one-sided taps into the full symmetric kernel of length
/// `2*delay + 1`, ready to be loaded into an FIR.
pub fn realize_taps(coeffs: &[f64], cutoff: f64) -> Result<Vec<f64>, ErrorsTLPF> {
    if coeffs.is_empty() || coeffs.len() % 2 != 0 {
        return Err(ErrorsTLPF::IncompatibleArraySizes((coeffs.len(), 2)));
    }
    if !cutoff.is_finite() || cutoff <= 0.0 || cutoff > PI {
        return Err(ErrorsTLPF::InvalidInputRange(
            "cutoff must lie in (0, pi] rad/sample",
        ));
    }

    let half_length = coeffs.len() / 2;
    let delay = half_length - 1;
    let mut taps = vec![0.0; 2 * delay + 1];
    taps[delay] = coeffs[0] + coeffs[1] * cutoff;
    for k in 1..half_length {
        let t = coeffs[2 * k] + coeffs[2 * k + 1] * cutoff;
        taps[delay - k] = t;
        taps[delay + k] = t;
    }
    Ok(taps)
}
