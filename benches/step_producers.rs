use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use egui_algoviz::{
    layouts::Circular, random_sorted_values, random_values, AlgoGraph, ArrayScene,
    GraphAlgorithm, Player, SearchAlgorithm, SortAlgorithm,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

fn bench_sorting(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let input = random_values(&mut rng, 100, 1..=100);

    let mut group = c.benchmark_group("sorting_n100");
    group.sample_size(20);
    group.measurement_time(Duration::from_millis(600));
    group.warm_up_time(Duration::from_millis(200));

    for algorithm in SortAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(algorithm.steps(black_box(&input))));
        });
    }

    group.bench_function("bubble_replay", |b| {
        b.iter_batched(
            || {
                let mut player = Player::new();
                player
                    .start(SortAlgorithm::Bubble.steps(&input), Duration::ZERO)
                    .ok();
                (player, ArrayScene::new(input.clone()))
            },
            |(mut player, mut scene)| {
                black_box(player.play_to_end(&mut scene));
                black_box(scene);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_searching(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let input = random_sorted_values(&mut rng, 100, 0..=999);
    let target = input[73];

    let mut group = c.benchmark_group("searching_n100");
    group.sample_size(20);
    for algorithm in SearchAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(algorithm.steps(black_box(&input), target)));
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let g = AlgoGraph::generate(&mut StdRng::seed_from_u64(3), 12, &Circular::default());
    let Some(start) = g.node_by_label("A") else {
        return;
    };

    let mut group = c.benchmark_group("traversal_n12");
    group.sample_size(20);
    for algorithm in GraphAlgorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(algorithm.steps(&g, start)));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().configure_from_args();
    targets = bench_sorting, bench_searching, bench_traversal
}
criterion_main!(benches);
