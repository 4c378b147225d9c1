use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossfill::{solve, GridConfig, Inference, SolverConfig, WordList};

pub fn criterion_benchmark(c: &mut Criterion) {
    let structure = std::fs::read_to_string("./data/structure1.txt").expect("failed to read structure");
    let words = std::fs::read_to_string("./data/words1.txt").expect("failed to read words");

    let config = GridConfig::from_structure_str(&structure).expect("failed to parse structure");
    let word_list = WordList::from_lines(&words);

    c.bench_function("solve_frame_plain_backtracking", |b| {
        let settings = SolverConfig { inference: Inference::None, max_backtracks: None };
        b.iter(|| {
            assert!(solve(black_box(&config), black_box(&word_list), settings.clone()).is_ok());
        });
    });

    c.bench_function("solve_frame_maintaining_arc_consistency", |b| {
        b.iter(|| {
            assert!(solve(black_box(&config), black_box(&word_list), SolverConfig::default()).is_ok());
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
