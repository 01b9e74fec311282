use std::{fs::File, io::Write, path::PathBuf};

use lib_tlpf::dsp::filters::tunable_lowpass::tunable_lowpass;

fn write_csv(path: PathBuf, data: &[f64]) {
    let mut f = File::create(path).expect("create csv");
    for &v in data {
        writeln!(f, "{v:.17}").expect("write line");
    }
}

fn main() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/dsp/test_data");
    std::fs::create_dir_all(&root).expect("create test_data");

    let d2 = tunable_lowpass(2, 16, 16).expect("design delay=2");
    write_csv(root.join("tunable_lowpass_delay2_grid16.csv"), &d2);

    let d3 = tunable_lowpass(3, 24, 24).expect("design delay=3");
    write_csv(root.join("tunable_lowpass_delay3_grid24.csv"), &d3);
}
