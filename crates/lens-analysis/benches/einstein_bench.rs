// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Einstein Radius Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use lens_analysis::{EinsteinRadiusOptions, ProfileAnalyzer};
use lens_models::evaluator::LensModel;
use lens_models::kind::ProfileKind;
use lens_types::params::{ComponentParams, ComponentSelector, LensParameterSet};
use std::hint::black_box;

fn sis_with_shear() -> (LensModel, LensParameterSet) {
    let model = LensModel::new(&[ProfileKind::Sis, ProfileKind::Shear])
        .expect("analytic profiles always build");
    let params = LensParameterSet::new(vec![
        ComponentParams::new()
            .with("theta_E", 1.2)
            .with("center_x", 0.05)
            .with("center_y", -0.03),
        ComponentParams::new().with("gamma1", 0.04).with("gamma2", 0.01),
    ]);
    (model, params)
}

fn bench_einstein_radius(c: &mut Criterion) {
    let (model, params) = sis_with_shear();
    let analyzer = ProfileAnalyzer::new(&model);
    let mut group = c.benchmark_group("einstein_radius");
    group.sample_size(10);

    for grid_num in [100usize, 200usize] {
        let opts = EinsteinRadiusOptions::default().with_grid(grid_num, 5.0 / grid_num as f64);
        group.bench_function(format!("sis_{}x{}", grid_num, grid_num), |b| {
            b.iter(|| {
                let er = analyzer
                    .effective_einstein_radius(&params, &opts)
                    .expect("SIS Einstein radius should be found");
                black_box(er.radius)
            })
        });
    }

    group.finish();
}

fn bench_radial_and_mge(c: &mut Criterion) {
    let (model, params) = sis_with_shear();
    let analyzer = ProfileAnalyzer::new(&model);
    let radii: Vec<f64> = (1..=200).map(|i| 0.025 * i as f64).collect();

    c.bench_function("radial_profile_200", |b| {
        b.iter(|| {
            let profile = analyzer
                .radial_profile(&radii, &params, None, &ComponentSelector::All)
                .expect("radial profile should evaluate");
            black_box(profile.values[0])
        })
    });

    let mut group = c.benchmark_group("multi_gaussian");
    group.sample_size(10);
    group.bench_function("sis_20_components", |b| {
        b.iter(|| {
            let mix = analyzer
                .multi_gaussian_decomposition(&params, None, &ComponentSelector::only(0), 20)
                .expect("MGE should fit an isothermal profile");
            black_box(mix.normalization)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_einstein_radius, bench_radial_and_mge);
criterion_main!(benches);
