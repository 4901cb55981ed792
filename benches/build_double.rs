use std::io::Write;
use std::time::Instant;

use double::catalog::GroupSpec;
use double::Double;

fn benchmark(spec: &str, n_times: u128) {
    print!("benchmark  {spec:4}:    ");
    std::io::stdout().flush().unwrap();

    let spec: GroupSpec = spec.parse().unwrap();
    let start = Instant::now();
    for _ in 0..n_times {
        let double = Double::new(spec.build().unwrap()).unwrap();
        assert!(double.multiplicity_free().is_ok());
    }
    let dur = start.elapsed();

    println!("{} ms / iter", dur.as_millis() / n_times);
}

fn main() {
    benchmark("S3", 10);
    benchmark("D6", 5);
    benchmark("A4", 5);
    benchmark("S4", 1);
    benchmark("A5", 1);
}
