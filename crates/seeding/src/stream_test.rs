use approx::assert_abs_diff_eq;
use rand::Rng;

use crate::stream::RandomStream;

#[test]
fn test_same_seed_same_sequence() {
    let mut a = RandomStream::new(42);
    let mut b = RandomStream::new(42);

    for _ in 0..100 {
        assert_eq!(a.uniform_float().to_bits(), b.uniform_float().to_bits());
        assert_eq!(a.uniform_int_range(-5, 5), b.uniform_int_range(-5, 5));
        assert_eq!(a.normal(1.0, 2.0).to_bits(), b.normal(1.0, 2.0).to_bits());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = RandomStream::new(1);
    let mut b = RandomStream::new(2);

    let seq_a: Vec<f64> = (0..8).map(|_| a.uniform_float()).collect();
    let seq_b: Vec<f64> = (0..8).map(|_| b.uniform_float()).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_seed_is_retained() {
    let mut stream = RandomStream::new(9001);
    stream.uniform_float();
    stream.fork();
    assert_eq!(stream.seed(), 9001);
}

#[test]
fn test_uniform_ranges() {
    let mut stream = RandomStream::new(7);

    for _ in 0..1000 {
        let f = stream.uniform_float();
        assert!((0.0..1.0).contains(&f));

        let r = stream.uniform_float_range(-3.0, 2.0);
        assert!((-3.0..2.0).contains(&r));

        let i = stream.uniform_int_range(1, 6);
        assert!((1..=6).contains(&i));
    }
}

#[test]
fn test_int_range_reaches_both_ends() {
    let mut stream = RandomStream::new(11);
    let mut seen = [false; 4];
    for _ in 0..500 {
        seen[stream.uniform_int_range(0, 3) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_degenerate_ranges_do_not_draw() {
    let mut a = RandomStream::new(3);
    let mut b = RandomStream::new(3);

    assert_eq!(a.uniform_float_range(5.0, 5.0), 5.0);
    assert_eq!(a.uniform_float_range(5.0, 1.0), 5.0);
    assert_eq!(a.uniform_int_range(4, 2), 4);

    assert_eq!(a.uniform_float().to_bits(), b.uniform_float().to_bits());
}

#[test]
fn test_normal_moments() {
    let mut stream = RandomStream::new(2718);
    let n = 20_000;
    let samples: Vec<f64> = (0..n).map(|_| stream.normal(10.0, 2.0)).collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert_abs_diff_eq!(mean, 10.0, epsilon = 0.1);
    assert_abs_diff_eq!(var.sqrt(), 2.0, epsilon = 0.1);
}

#[test]
fn test_weighted_choice_proportions() {
    let mut stream = RandomStream::new(123);
    let items = ["rare", "common"];
    let weights = [1.0, 9.0];

    let mut common = 0;
    for _ in 0..10_000 {
        if *stream.weighted_choice(&items, &weights).unwrap() == "common" {
            common += 1;
        }
    }

    // Expect ~90%
    assert!(common > 8_700 && common < 9_300, "common = {}", common);
}

#[test]
fn test_weighted_choice_skips_zero_weights() {
    let mut stream = RandomStream::new(5);
    let items = [1, 2, 3];
    let weights = [0.0, 3.0, 0.0];

    for _ in 0..200 {
        assert_eq!(*stream.weighted_choice(&items, &weights).unwrap(), 2);
    }
}

#[test]
fn test_weighted_choice_all_zero_falls_back_to_uniform() {
    let mut stream = RandomStream::new(8);
    let items = ['a', 'b', 'c'];
    let weights = [0.0, -1.0, 0.0];

    let mut seen = [false; 3];
    for _ in 0..300 {
        let c = *stream.weighted_choice(&items, &weights).unwrap();
        seen[(c as u8 - b'a') as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_weighted_choice_empty() {
    let mut stream = RandomStream::new(8);
    let items: [u8; 0] = [];
    assert!(stream.weighted_choice(&items, &[]).is_none());
}

#[test]
fn test_fork_consumes_exactly_one_draw() {
    let mut forked = RandomStream::new(31337);
    let mut reference = RandomStream::new(31337);

    let _child = forked.fork();
    let _ = reference.next_seed();

    for _ in 0..50 {
        assert_eq!(
            forked.uniform_float().to_bits(),
            reference.uniform_float().to_bits()
        );
    }
}

#[test]
fn test_fork_is_decorrelated_from_parent() {
    let mut parent = RandomStream::new(4242);
    let mut child = parent.fork();

    assert_ne!(child.seed(), parent.seed());

    let from_parent: Vec<u64> = (0..16).map(|_| parent.next_seed()).collect();
    let from_child: Vec<u64> = (0..16).map(|_| child.next_seed()).collect();
    assert_ne!(from_parent, from_child);
}

#[test]
fn test_forks_are_reproducible() {
    let mut a = RandomStream::new(55);
    let mut b = RandomStream::new(55);

    let mut child_a = a.fork();
    let mut child_b = b.fork();
    assert_eq!(child_a.seed(), child_b.seed());
    assert_eq!(child_a.next_seed(), child_b.next_seed());
}

#[test]
fn test_usable_as_rand_rng() {
    let mut stream = RandomStream::new(1);
    let roll: u8 = stream.random_range(1..=6);
    assert!((1..=6).contains(&roll));
}

#[test]
fn test_at_resumes_mid_stream() {
    let mut stream = RandomStream::new(2718);
    stream.uniform_float();
    stream.normal(0.0, 1.0);
    stream.next_seed();

    let mut resumed = RandomStream::at(stream.seed(), stream.word_pos());
    assert_eq!(resumed.seed(), 2718);
    assert_eq!(resumed.word_pos(), stream.word_pos());

    for _ in 0..50 {
        assert_eq!(
            stream.uniform_float().to_bits(),
            resumed.uniform_float().to_bits()
        );
        assert_eq!(stream.next_seed(), resumed.next_seed());
    }
}

#[test]
fn test_word_pos_counts_draws() {
    let mut stream = RandomStream::new(9);
    assert_eq!(stream.word_pos(), 0);

    stream.next_seed();
    assert_eq!(stream.word_pos(), 1);

    stream.uniform_float();
    assert_eq!(stream.word_pos(), 3);
}
