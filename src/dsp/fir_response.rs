/// Frequency-response evaluation for real FIR kernels. The response at a
/// normalized frequency `w` (rad/sample) is the magnitude of the DTFT of
/// the tap sequence, `|sum_n taps[n] * e^(-jwn)|`. This is what the design
/// routines in `dsp::filters` are checked against.
use num::Complex;

use crate::prelude::ErrorsTLPF;

pub fn magnitude_response(taps: &[f64], w: f64) -> f64 {
    let mut acc = Complex::new(0.0, 0.0);
    for (n, &t) in taps.iter().enumerate() {
        let phase = -(n as f64) * w;
        acc += Complex::new(phase.cos(), phase.sin()) * t;
    }
    acc.norm()
}

/// Magnitude response sampled on the uniform grid `w = j/n * pi` for
/// `j = 0..=n`, the same grid shape the lowpass design traces.
pub fn magnitude_response_grid(taps: &[f64], n: usize) -> Result<Vec<f64>, ErrorsTLPF> {
    if n == 0 {
        return Err(ErrorsTLPF::InvalidInputRange(
            "response grid must have at least one interval",
        ));
    }
    let mut out = Vec::with_capacity(n + 1);
    for j in 0..=n {
        let w = j as f64 / n as f64 * std::f64::consts::PI;
        out.push(magnitude_response(taps, w));
    }
    Ok(out)
}
