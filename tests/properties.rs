use itertools::Itertools;
use pa_ned::prelude::*;
use pa_ned::{align, distance, distance_with, normalized_distance};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_strings(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..=max_len);
            (0..n).map(|_| rng.gen_range(b'a'..=b'd') as char).collect()
        })
        .collect()
}

#[test]
fn identity() {
    for s in random_strings(20, 30, 1) {
        assert_eq!(distance(&s, &s), 0.);
        let (cost, alignment) = align(&s, &s, &UniformCost::unit());
        assert_eq!(cost, 0.);
        assert!(alignment.iter().all(|op| op.kind() == EditKind::Match));
        assert_eq!(alignment.len(), s.len());
    }
}

#[test]
fn small_examples() {
    assert_eq!(distance("cat", "cat"), 0.);
    assert_eq!(distance("kitten", "sitting"), 3.);

    let (cost, alignment) = align("cat", "bat", &UniformCost::unit());
    assert_eq!(cost, 1.);
    assert_eq!(alignment.count(EditKind::Sub), 1);
    let sub = alignment
        .iter()
        .find(|op| op.kind() == EditKind::Sub)
        .unwrap();
    assert_eq!(*sub, EditOp::sub(Symbol::new('c'), Symbol::new('b'), 0.));
}

#[test]
fn case_insensitive() {
    assert_eq!(distance("Kitten", "SITTING"), 3.);
    assert_eq!(distance("HeLLo", "hello"), 0.);
}

#[test]
fn alignment_reconstructs_second_sequence() {
    let strings = random_strings(12, 15, 2);
    let cm = UniformCost::linear_asymmetric(1., 0.75, 1.25);
    for (a, b) in strings.iter().cartesian_product(&strings) {
        let (cost, alignment) = align(a, b, &cm);
        let (sa, sb) = (to_sequence(a), to_sequence(b));
        assert_eq!(alignment.apply(&sa).unwrap(), sb);
        assert!(alignment.len() >= sa.len().max(sb.len()));
        assert!(alignment.len() <= sa.len() + sb.len());
        assert!((alignment.cost() - cost).abs() < 1e-9);
        assert_eq!(cost, distance_with(a, b, &cm));
    }
}

#[test]
fn triangle_inequality() {
    let strings = random_strings(10, 12, 3);
    for ((a, b), c) in strings
        .iter()
        .cartesian_product(&strings)
        .cartesian_product(&strings)
    {
        assert!(distance(a, c) <= distance(a, b) + distance(b, c));
    }
}

#[test]
fn symmetric_for_symmetric_costs() {
    let strings = random_strings(10, 20, 4);
    for (a, b) in strings.iter().tuple_combinations() {
        assert_eq!(distance(a, b), distance(b, a));
    }
}

#[test]
fn empty_sequences() {
    let cm = UniformCost::linear_asymmetric(1., 2., 3.);
    assert_eq!(distance("", ""), 0.);

    let (cost, alignment) = align("", "abc", &cm);
    assert_eq!(cost, 6.);
    assert!(alignment.iter().all(|op| op.kind() == EditKind::Ins));
    assert_eq!(alignment.len(), 3);

    let (cost, alignment) = align("abc", "", &cm);
    assert_eq!(cost, 9.);
    assert!(alignment.iter().all(|op| op.kind() == EditKind::Del));
    assert_eq!(alignment.to_string(), "abc\n   \n---");
}

#[test]
fn tie_break_prefers_diagonal() {
    // Matching costs as much as deleting, so for "aa" -> "a" both the
    // diagonal and the vertical move out of the last cell are optimal.
    let cm = UniformCost::new(1., 2., 1., 1.);
    let (cost, alignment) = align("aa", "a", &cm);
    assert_eq!(cost, 2.);
    assert_eq!(alignment.to_cigar(), "1D1M");
    assert_eq!(alignment.ops()[1].kind(), EditKind::Match);
}

#[test]
fn normalized_root() {
    let cm = UniformCost::unit();
    for (a, b) in [("cat", "bat"), ("kitten", "sitting"), ("abc", ""), ("ab", "ba")] {
        let lambda = normalized_distance(a, b, &cm).unwrap();
        let total = (a.len() + b.len()) as Cost;
        let d = distance_with(a, b, &cm.with_offset(lambda));
        assert!((d - lambda * total).abs() < 1e-6, "{a} {b}: {d} vs {lambda}");
    }
    assert!((normalized_distance("cat", "bat", &cm).unwrap() - 1. / 3.).abs() < 1e-9);
}

#[test]
fn normalized_rejects_invalid_costs() {
    let cm = UniformCost::new(0., Cost::INFINITY, 1., 1.);
    assert!(matches!(
        normalized_distance("a", "b", &cm),
        Err(Error::InvalidCost { .. })
    ));
}

#[test]
fn keyboard_typos() {
    let cm = GenericCost::keyboard();
    // 'r' and 't' are neighbours, 'r' and 'p' are not.
    assert!(distance_with("rat", "tat", &cm) < distance_with("rat", "pat", &cm));
    assert_eq!(distance_with("rat", "pat", &cm), 1.);
}
