use std::hint::black_box;

use balatro_rs::cards::{parse_cards, Card};
use balatro_rs::evaluator::{best_play, evaluate_five};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let hands = [
        ("high_card", five("A♥ K♦ 7♠ 5♣ 2♦")),
        ("two_pair", five("9♠ 9♥ 4♦ 4♣ K♠")),
        ("wheel", five("A♠ 2♥ 3♦ 4♣ 5♠")),
        ("straight_flush", five("A♠ K♠ Q♠ J♠ 10♠")),
    ];

    let mut g = c.benchmark_group("evaluate_five");
    for (name, hand) in &hands {
        g.bench_with_input(BenchmarkId::new("category", name), hand, |b, input| {
            b.iter(|| evaluate_five(black_box(input)))
        });
    }
    g.finish();
}

fn bench_best_play(c: &mut Criterion) {
    let eight = parse_cards("K♣ 9♥ 9♠ 2♦ 9♦ 4♣ K♥ 7♠").unwrap();
    c.bench_function("best_play_8", |b| b.iter(|| best_play(black_box(&eight))));

    let twelve = parse_cards("2♥ K♠ 7♥ 7♣ 9♥ J♥ 3♦ Q♥ 5♠ 6♦ 8♣ 4♠").unwrap();
    c.bench_function("best_play_12", |b| b.iter(|| best_play(black_box(&twelve))));
}

criterion_group!(benches, bench_evaluate_five, bench_best_play);
criterion_main!(benches);
