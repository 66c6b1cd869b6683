use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orrery::time::utc;
use orrery::{Catalog, Ephemeris, KeplerSolver, Snapshot};

/// Mean anomalies spread over one revolution
fn anomaly_grid(samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|i| i as f64 / samples as f64 * std::f64::consts::TAU)
        .collect()
}

fn bench_solvers(c: &mut Criterion) {
    let grid = anomaly_grid(1_000);
    let fixed = KeplerSolver::new();
    let converging = KeplerSolver::converging(1e-15, 200);

    for e in [0.0167, 0.2056, 0.7] {
        c.bench_function(&format!("kepler/fixed10/e={}", e), |b| {
            b.iter(|| {
                for &m in &grid {
                    black_box(fixed.solve(black_box(m), e, 1.0));
                }
            })
        });
        c.bench_function(&format!("kepler/converge/e={}", e), |b| {
            b.iter(|| {
                for &m in &grid {
                    black_box(converging.solve(black_box(m), e, 1.0));
                }
            })
        });
    }
}

fn bench_snapshot(c: &mut Criterion) {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => panic!("built-in catalog failed to load: {}", e),
    };
    let ephemeris = Ephemeris::new();
    let when = utc(2025, 10, 18, 0, 0, 0).unwrap();

    c.bench_function("snapshot/builtin", |b| {
        b.iter(|| black_box(Snapshot::evaluate(&catalog, &ephemeris, black_box(&when))))
    });
}

criterion_group!(benches, bench_solvers, bench_snapshot);
criterion_main!(benches);
