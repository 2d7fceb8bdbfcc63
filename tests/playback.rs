use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use egui_algoviz::{
    is_sorted, layouts::Circular, random_sorted_values, random_values, visit_order, AlgoGraph,
    ArrayScene, GraphAlgorithm, GraphScene, Outcome, Player, SearchAlgorithm, SortAlgorithm,
    Status, Step, ThreadSleeper,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_bubble_example() {
    let input = vec![5, 3, 8, 1];
    let steps = SortAlgorithm::Bubble.steps(&input);
    assert!(steps.iter().any(|s| *s == Step::Compare { i: 0, j: 1 }));
    assert!(steps.iter().any(|s| *s == Step::Swap { i: 0, j: 1 }));

    let mut scene = ArrayScene::new(input);
    let mut player = Player::new();
    player.start(steps, Duration::ZERO).expect("start");
    let summary = player.play_to_end(&mut scene).expect("summary");
    assert_eq!(scene.values(), &[1, 3, 5, 8]);
    assert_eq!(summary.outcome, Outcome::Sorted);
}

#[test]
fn test_sorts_on_random_input() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let len = rng.random_range(5..=30);
        let input = random_values(&mut rng, len, 1..=100);
        let mut expected = input.clone();
        expected.sort_unstable();

        for algorithm in SortAlgorithm::ALL {
            let steps = algorithm.steps(&input);
            assert_eq!(steps, algorithm.steps(&input), "{}", algorithm.name());

            let mut scene = ArrayScene::new(input.clone());
            let mut player = Player::new();
            player.start(steps, Duration::ZERO).expect("start");
            player.play_to_end(&mut scene).expect("summary");

            assert_eq!(scene.values(), expected.as_slice(), "{}", algorithm.name());
            assert!(scene.flags().iter().all(|f| f.sorted), "{}", algorithm.name());
        }
    }
}

#[test]
fn test_searches_on_random_input() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..100 {
        let len = rng.random_range(1..=40);
        let values = random_sorted_values(&mut rng, len, 0..=99);
        let target = if rng.random_bool(0.5) {
            values[rng.random_range(0..len)]
        } else {
            rng.random_range(-5..=105)
        };

        for algorithm in SearchAlgorithm::ALL {
            let steps = algorithm.steps(&values, target);
            let terminals = steps.iter().filter(|s| s.is_terminal()).count();
            assert_eq!(terminals, 1, "{}", algorithm.name());

            let mut scene = ArrayScene::new(values.clone());
            let mut player = Player::new();
            player.start(steps, Duration::ZERO).expect("start");
            let summary = player.play_to_end(&mut scene).expect("summary");

            match summary.outcome {
                Outcome::Found(idx) => assert_eq!(values[idx], target, "{}", algorithm.name()),
                Outcome::NotFound => {
                    assert!(!values.contains(&target), "{} missed {target} in {values:?}", algorithm.name());
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }
}

#[test]
fn test_duplicate_target_found_at_either_index() {
    let values = vec![2, 4, 4, 6, 10];
    let mut scene = ArrayScene::new(values.clone());
    let mut player = Player::new();
    player
        .start(SearchAlgorithm::Binary.steps(&values, 4), Duration::ZERO)
        .expect("start");
    let summary = player.play_to_end(&mut scene).expect("summary");
    assert!(matches!(summary.outcome, Outcome::Found(1 | 2)));
    assert!(is_sorted(scene.values()));
}

#[test]
fn test_traversals_replay_on_generated_graphs() {
    let mut rng = StdRng::seed_from_u64(13);
    for count in 4..=12 {
        let g = AlgoGraph::generate(&mut rng, count, &Circular::default());
        let start = g.node_by_label("A").expect("A");

        for algorithm in GraphAlgorithm::ALL {
            let steps = algorithm.steps(&g, start).expect("steps");
            let order = visit_order(&steps);

            let mut scene = GraphScene::new(&g, start);
            let mut player = Player::new();
            player.start(steps, Duration::ZERO).expect("start");
            let summary = player.play_to_end(&mut scene).expect("summary");

            assert_eq!(summary.outcome, Outcome::Traversed { visited: count });
            assert_eq!(scene.visited_order(), order.as_slice());
            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), count);
        }
    }
}

#[test]
fn test_blocking_run_cancelled_from_another_thread() {
    let input: Vec<i64> = (1..=100).rev().collect();
    let steps = SortAlgorithm::Bubble.steps(&input);
    let mut player = Player::new();
    let handle = player.handle();

    let worker = thread::spawn(move || {
        let mut scene = ArrayScene::new(input);
        let res = player.run(steps, Duration::from_millis(1), &mut scene, &mut ThreadSleeper);
        (res, player.status())
    });

    // the run clears flags when it starts, so keep asking until it stops
    while !worker.is_finished() {
        handle.cancel();
        thread::sleep(Duration::from_millis(5));
    }

    let (res, status) = worker.join().expect("worker");
    assert_eq!(res, Ok(None));
    assert_eq!(status, Status::Cancelled);
}
