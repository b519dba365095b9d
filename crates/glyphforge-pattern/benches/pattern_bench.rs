use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glyphforge_pattern::{
    CellularAutomaton, FractalTree, LSystem, PatternGenerator, PatternKind, PatternRequest,
};

fn bench_fractal_tree_depth_10(c: &mut Criterion) {
    let request = PatternRequest::new(PatternKind::FractalTree, 10, 1);
    c.bench_function("fractal_tree_depth_10", |b| {
        b.iter(|| FractalTree.generate(black_box(&request)))
    });
}

fn bench_automaton_64_generations(c: &mut Criterion) {
    let request = PatternRequest::new(PatternKind::CellularAutomata, 64, 1);
    c.bench_function("automaton_64_generations", |b| {
        b.iter(|| CellularAutomaton.generate(black_box(&request)))
    });
}

fn bench_lsystem_6_iterations(c: &mut Criterion) {
    let system = LSystem::default();
    let request = PatternRequest::new(PatternKind::LSystem, 6, 1);
    c.bench_function("lsystem_6_iterations", |b| {
        b.iter(|| system.generate(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_fractal_tree_depth_10,
    bench_automaton_64_generations,
    bench_lsystem_6_iterations,
);
criterion_main!(benches);
