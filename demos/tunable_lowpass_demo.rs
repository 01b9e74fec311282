use std::f64::consts::PI;

use lib_tlpf::dsp::filters::tunable_lowpass::{realize_taps, tunable_lowpass};
use lib_tlpf::dsp::fir_response::magnitude_response;

fn main() {
    let delay = 2;
    let coeffs = tunable_lowpass(delay, 16, 16).expect("design failed");

    println!("Cutoff-tunable lowpass, delay={delay} ({} taps)", 2 * delay + 1);
    println!("tap k = a[2k] + a[2k+1]*cutoff, tap 0 at the center:");
    for (k, pair) in coeffs.chunks_exact(2).enumerate() {
        println!("  tap {k}: {:+.6} {:+.6}*c", pair[0], pair[1]);
    }

    for cutoff in [0.25 * PI, 0.5 * PI, 0.75 * PI] {
        let taps = realize_taps(&coeffs, cutoff).expect("realize failed");
        println!("\ncutoff = {:.2}*pi -> taps {:?}", cutoff / PI, taps);
        for j in 0..=4 {
            let w = j as f64 / 4.0 * PI;
            println!(
                "  |H({:.2}*pi)| = {:.4}",
                w / PI,
                magnitude_response(&taps, w)
            );
        }
    }
}
