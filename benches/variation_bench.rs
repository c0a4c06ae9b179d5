//! Criterion benchmarks for the structural variation operators.
//!
//! Uses an identity delegate so the timings measure pure structural
//! overhead (classification, alignment, projection) independent of any
//! numeric crossover algorithm.

use conmop_variation::operators::{OrbitElementOperator, RealVariation, Variation};
use conmop_variation::random::create_rng;
use conmop_variation::variable::{
    BoundedReal, ConstellationVariable, SatelliteVariable, Solution, Variable,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

/// Delegate that returns its parents unchanged.
struct IdentityVariation;

impl RealVariation for IdentityVariation {
    fn arity(&self) -> usize {
        2
    }

    fn evolve<R: Rng>(&self, parents: &[Vec<BoundedReal>], _rng: &mut R) -> Vec<Vec<BoundedReal>> {
        parents.to_vec()
    }
}

fn satellite(value: f64) -> SatelliteVariable {
    let b = BoundedReal::new(value, 0.0, 1e5);
    SatelliteVariable::new(b, b, b, b, b, b)
}

fn constellation(num_satellites: usize) -> ConstellationVariable {
    ConstellationVariable::new((0..num_satellites).map(|j| satellite(j as f64)).collect())
}

fn parent_pair(num_satellites: usize) -> [Solution; 2] {
    let build = |count: usize| {
        Solution::new(vec![
            Variable::Real(BoundedReal::new(0.5, 0.0, 1.0)),
            Variable::Constellation(constellation(count)),
            Variable::Satellite(satellite(1.0)),
        ])
    };
    // second parent is larger so alignment has work to do
    [build(num_satellites), build(num_satellites + num_satellites / 2)]
}

fn bench_evolve_solutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_solutions");

    for &num_satellites in &[4usize, 16, 64, 256] {
        let operator = OrbitElementOperator::new(IdentityVariation);
        let parents = parent_pair(num_satellites);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_satellites),
            &parents,
            |b, parents| {
                let mut rng = create_rng(42);
                b.iter(|| {
                    let children = operator.evolve(black_box(parents), &mut rng).unwrap();
                    black_box(children)
                })
            },
        );
    }
    group.finish();
}

fn bench_evolve_constellations(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_constellations");

    for &num_satellites in &[4usize, 16, 64, 256] {
        let operator = OrbitElementOperator::new(IdentityVariation);
        let group_input = [
            constellation(num_satellites),
            constellation(num_satellites * 2),
        ];
        group.bench_with_input(
            BenchmarkId::from_parameter(num_satellites),
            &group_input,
            |b, input| {
                let mut rng = create_rng(42);
                b.iter(|| {
                    let out = operator
                        .evolve_constellations(black_box(input), &mut rng)
                        .unwrap();
                    black_box(out)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evolve_solutions, bench_evolve_constellations);
criterion_main!(benches);
