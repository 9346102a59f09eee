use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use showdown::evaluator::evaluate;
use showdown::hand::Hand;
use showdown::resolver::resolve;

fn bench_evaluate(c: &mut Criterion) {
    let high_card: Hand = "2D 5C 7S KD AH".parse().expect("valid hand");
    let two_pair: Hand = "2C 2D 5H 5S KD".parse().expect("valid hand");
    let steel_wheel: Hand = "AS 2S 3S 4S 5S".parse().expect("valid hand");

    let mut g = c.benchmark_group("evaluate");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &high_card, |b, h| {
        b.iter(|| evaluate(black_box(h)))
    });
    g.bench_with_input(BenchmarkId::new("two_pair", "2,2,5,5,K"), &two_pair, |b, h| {
        b.iter(|| evaluate(black_box(h)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "wheel"), &steel_wheel, |b, h| {
        b.iter(|| evaluate(black_box(h)))
    });
    g.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let hands = ["2H 3D 5S 9C KD", "2C 3H 4S 8C AH", "9C 9D 9H 2S 3C", "4H 5H 6H 7H 8H"];
    let evals: Vec<_> = hands
        .iter()
        .map(|s| evaluate(&s.parse::<Hand>().expect("valid hand")))
        .collect();
    c.bench_function("resolve_four_hands", |b| b.iter(|| resolve(black_box(&evals))));
}

criterion_group!(benches, bench_evaluate, bench_resolve);
criterion_main!(benches);
