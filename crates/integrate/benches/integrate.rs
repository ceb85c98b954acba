use std::hint::black_box;
use std::time::Duration;

use bench::{
    ALL_PLACEMENTS, apply_large_runtime_config, apply_small_runtime_config, default_rng,
    sorted_dataset, unsorted_batch, with_spare_capacity,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use integrate::{ALL_STRATEGIES, DEFAULT_PARAMS, IntegrateParams, Integrator, strategy_name};

const SORTED_SIZES: [usize; 3] = [4096, 65536, 1 << 20];
const BATCH_SIZES: [usize; 3] = [4, 64, 1024];

fn bench_integrate(c: &mut Criterion) {
    let mut rng = default_rng();

    for &placement in &ALL_PLACEMENTS {
        for &sorted_len in &SORTED_SIZES {
            let mut group =
                c.benchmark_group(format!("integrate/{}/n{}", placement.label(), sorted_len));
            if sorted_len <= 65536 {
                apply_small_runtime_config(&mut group);
            } else {
                apply_large_runtime_config(&mut group);
            }

            let sorted = sorted_dataset(&mut rng, sorted_len);

            for &batch_len in &BATCH_SIZES {
                let batch = unsorted_batch(&mut rng, sorted_len, batch_len, placement);

                for &strategy in &ALL_STRATEGIES {
                    let params = IntegrateParams {
                        suffix: strategy,
                        ..DEFAULT_PARAMS
                    };
                    group.bench_function(
                        BenchmarkId::new(strategy_name(strategy), batch_len),
                        |bencher| {
                            bencher.iter_custom(|iters| {
                                let mut total = Duration::ZERO;
                                let mut integrator = Integrator::with_params(params);
                                for _ in 0..iters {
                                    let mut data = with_spare_capacity(&sorted, batch.len());
                                    let start = std::time::Instant::now();
                                    integrator.integrate_in_place(&mut data, black_box(&batch));
                                    total += start.elapsed();
                                    black_box(&data);
                                }
                                total
                            });
                        },
                    );
                }

                group.bench_function(BenchmarkId::new("std_full_sort", batch_len), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = with_spare_capacity(&sorted, batch.len());
                            let start = std::time::Instant::now();
                            data.extend_from_slice(black_box(&batch));
                            data.sort_unstable();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.finish();
        }
    }
}

criterion_group!(benches, bench_integrate);
criterion_main!(benches);
