//! Benchmarks for ladder synthesis and rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lumpline_core::{
    DiscretizationPlan, LadderTopology, LineGeometry, LineParameters, Netlist, NodeId,
    SectionParameters,
};
use nalgebra::DMatrix;

/// A bundle of `size` conductors with nearest-neighbor-dominated coupling.
fn bundle(size: usize) -> LineParameters {
    let inductance = DMatrix::from_fn(size, size, |row, col| {
        if row == col {
            4e-7
        } else {
            1e-7 / (row.abs_diff(col) as f64)
        }
    });
    let capacitance = DMatrix::from_fn(size, size, |row, col| {
        if row == col {
            1e-10
        } else {
            2e-11 / (row.abs_diff(col) as f64)
        }
    });
    LineParameters {
        num_conductors: size,
        resistance: 5.0,
        conductance: 0.02,
        inductance,
        capacitance,
    }
}

fn bench_estimate_sections(c: &mut Criterion) {
    let params = bundle(8);
    let geometry = LineGeometry::new(0.3, 2e-9).expect("valid geometry");
    c.bench_function("estimate_sections_8", |b| {
        b.iter(|| DiscretizationPlan::estimate(black_box(&params), black_box(&geometry)))
    });
}

fn bench_synthesize(c: &mut Criterion) {
    let params = bundle(8);
    let geometry = LineGeometry::new(0.3, 2e-9).expect("valid geometry");
    let plan = DiscretizationPlan::estimate(&params, &geometry).expect("estimate");
    let section = SectionParameters::derive(&params, &geometry, plan);
    c.bench_function("synthesize_8_conductors", |b| {
        b.iter(|| {
            let topology =
                LadderTopology::build(params.num_conductors, plan.num_sections, NodeId::new(1));
            Netlist::synthesize(black_box(&section), &topology)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let params = bundle(8);
    let geometry = LineGeometry::new(0.3, 2e-9).expect("valid geometry");
    let plan = DiscretizationPlan::estimate(&params, &geometry).expect("estimate");
    let section = SectionParameters::derive(&params, &geometry, plan);
    let topology = LadderTopology::build(params.num_conductors, plan.num_sections, NodeId::new(1));
    let netlist = Netlist::synthesize(&section, &topology);
    c.bench_function("render_8_conductors", |b| {
        b.iter(|| black_box(&netlist).to_string())
    });
}

criterion_group!(benches, bench_estimate_sections, bench_synthesize, bench_render);
criterion_main!(benches);
