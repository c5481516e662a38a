use criterion::{criterion_group, criterion_main, Criterion};
use peakloc::{GaussianKernel, PeakSearch, SavitzkyGolay, SearchConfig, Smoother, Spectrum};
use std::hint::black_box;

fn make_spectrum(len: usize, lines: usize) -> Spectrum {
    let step = 0.01;
    let spacing = len as f64 * step / (lines as f64 + 1.0);
    let positions: Vec<f64> = (0..len).map(|i| i as f64 * step).collect();
    let values = positions
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let clean: f64 = (1..=lines)
                .map(|k| {
                    let center = k as f64 * spacing;
                    let width = 0.2 * spacing;
                    (1.0 + 0.1 * k as f64) / (1.0 + ((x - center) / width).powi(2))
                })
                .sum();
            let ripple = (((i * 37) ^ (i * 11)) % 97) as f64 / 97.0 - 0.5;
            clean + 0.01 * ripple
        })
        .collect();
    Spectrum::new(positions, values).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let spectrum = make_spectrum(20_000, 40);
    let smoothed = SavitzkyGolay::new(21, 2)
        .unwrap()
        .smooth_spectrum(&spectrum)
        .unwrap();

    let search = PeakSearch::new(6);
    c.bench_function("search_20k_hw6", |b| {
        b.iter(|| black_box(search.search_spectrum(&smoothed).unwrap()));
    });

    if cfg!(feature = "rayon") {
        let search_par = PeakSearch::default().with_config(SearchConfig {
            half_width: 6,
            parallel: true,
            ..SearchConfig::default()
        });
        c.bench_function("search_20k_hw6_parallel", |b| {
            b.iter(|| black_box(search_par.search_spectrum(&smoothed).unwrap()));
        });
    }
}

fn bench_smoothing(c: &mut Criterion) {
    let spectrum = make_spectrum(20_000, 40);
    let savgol = SavitzkyGolay::new(21, 2).unwrap();
    c.bench_function("savitzky_golay_21_2", |b| {
        b.iter(|| black_box(savgol.smooth_spectrum(&spectrum).unwrap()));
    });

    let gaussian = GaussianKernel::new(3.0).unwrap();
    c.bench_function("gaussian_sigma3", |b| {
        b.iter(|| black_box(gaussian.smooth_spectrum(&spectrum).unwrap()));
    });
}

criterion_group!(benches, bench_search, bench_smoothing);
criterion_main!(benches);
