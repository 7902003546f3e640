use crate::prelude::*;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"acgt";

fn random_sequence(n: usize, rng: &mut impl Rng) -> Vec<u8> {
    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// Apply `e` random substitutions, insertions and deletions.
fn random_mutate(a: &[u8], e: usize, rng: &mut impl Rng) -> Vec<u8> {
    let mut b = a.to_vec();
    for _ in 0..e {
        let c = ALPHABET[rng.gen_range(0..ALPHABET.len())];
        match rng.gen_range(0..3) {
            0 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b[i] = c;
            }
            1 if !b.is_empty() => {
                b.remove(rng.gen_range(0..b.len()));
            }
            _ => b.insert(rng.gen_range(0..=b.len()), c),
        }
    }
    b
}

/// Sequence pairs of length `n` with error rate `e`, using a fixed seed per pair.
fn test_sequences() -> impl Iterator<Item = (Vec<u8>, Vec<u8>, (usize, f32))> {
    let ns = [0usize, 1, 2, 3, 4, 5, 7, 10, 20, 50, 100];
    let es = [0.0f32, 0.05, 0.10, 0.20, 0.50, 1.0];
    ns.into_iter()
        .cartesian_product(es)
        .map(|(n, e)| {
            let rng = &mut ChaCha8Rng::seed_from_u64(31415 + n as u64);
            let a = random_sequence(n, rng);
            let b = random_mutate(&a, (n as f32 * e).ceil() as usize, rng);
            (a, b, (n, e))
        })
}

fn seq(s: &[u8]) -> Sequence {
    s.iter().map(|&c| Symbol::new(c as char)).collect()
}

/// Test that:
/// - `cost` and `align` agree, and match the reference cost when given;
/// - the alignment turns `a` into `b` and its operations sum to the cost;
/// - the alignment length is between `max(|a|, |b|)` and `|a| + |b|`.
fn test_aligner(aligner: &impl Aligner, reference: Option<fn(&[u8], &[u8]) -> Cost>) {
    for (a_raw, b_raw, (n, e)) in test_sequences() {
        let (a, b) = (seq(&a_raw), seq(&b_raw));
        let cost = aligner.cost(&a, &b);
        if let Some(reference) = reference {
            assert_eq!(
                reference(&a_raw, &b_raw),
                cost,
                "n {n} e {e}\na {}\nb {}",
                to_string(&a),
                to_string(&b)
            );
        }
        let (align_cost, alignment) = aligner.align(&a, &b);
        assert_eq!(cost, align_cost, "n {n} e {e}");
        alignment.verify(&a, &b).unwrap();
        assert!((alignment.cost() - cost).abs() < 1e-9, "n {n} e {e}");
        assert!(alignment.len() >= a.len().max(b.len()));
        assert!(alignment.len() <= a.len() + b.len());
    }
}

fn reference_levenshtein(a: &[u8], b: &[u8]) -> Cost {
    triple_accel::levenshtein(a, b) as Cost
}

mod nw {
    use super::*;

    #[test]
    fn unit_cost() {
        test_aligner(&NW::new(UniformCost::unit()), Some(reference_levenshtein));
    }

    #[test]
    fn linear_cost() {
        // sub=1, indel=2
        test_aligner(&NW::new(UniformCost::linear(1., 2.)), None);
    }

    #[test]
    fn linear_asymmetric_cost() {
        // sub=1, insert=2, deletion=3
        test_aligner(&NW::new(UniformCost::linear_asymmetric(1., 2., 3.)), None);
    }

    #[test]
    fn fractional_cost() {
        test_aligner(&NW::new(UniformCost::new(0.1, 0.7, 0.3, 0.45)), None);
    }

    #[test]
    fn generic_cost() {
        let mut cm = GenericCost::new(UniformCost::linear(1.5, 1.));
        cm.set_sub_symmetric('a', 'g', 0.5);
        cm.set_sub_symmetric('c', 't', 0.5);
        cm.set_ins('a', 2.);
        cm.set_del('t', 0.25);
        test_aligner(&NW::new(cm), None);
    }
}

mod levenshtein {
    use super::*;

    #[test]
    fn unit_cost() {
        test_aligner(&Levenshtein::default(), Some(reference_levenshtein));
    }

    #[test]
    fn linear_asymmetric_cost() {
        test_aligner(&Levenshtein::new(UniformCost::linear_asymmetric(1., 2., 3.)), None);
    }

    #[test]
    fn same_as_nw() {
        let cm = UniformCost::new(0.25, 1.5, 0.75, 1.25).with_offset(0.5);
        for (a, b, _) in test_sequences() {
            let (a, b) = (seq(&a), seq(&b));
            assert_eq!(Levenshtein::new(cm).cost(&a, &b), NW::new(cm).cost(&a, &b));
            assert_eq!(Levenshtein::new(cm).align(&a, &b), NW::new(cm).align(&a, &b));
        }
    }
}

mod normalize {
    use super::*;

    #[test]
    fn root_condition() {
        for cm in [
            UniformCost::unit(),
            UniformCost::linear(1., 2.),
            UniformCost::new(0.5, 1., 1., 1.),
        ] {
            for (a, b, (n, e)) in test_sequences().filter(|(_, _, (n, _))| *n <= 20) {
                let (a, b) = (seq(&a), seq(&b));
                let lambda = Normalizer::default().distance(&a, &b, &cm).unwrap();
                let total = (a.len() + b.len()) as Cost;
                let d = NW::new(cm.with_offset(lambda)).cost(&a, &b);
                assert!(
                    (d - lambda * total).abs() <= 1e-6 * total.max(1.),
                    "n {n} e {e}: dist {d} lambda {lambda}"
                );
            }
        }
    }

    #[test]
    fn bounded_by_unit_costs() {
        // With unit costs, every operation costs at most 1, so lambda <= 1.
        for (a, b, _) in test_sequences().filter(|(_, _, (n, _))| *n <= 20) {
            let lambda = Normalizer::default()
                .distance(&seq(&a), &seq(&b), &UniformCost::unit())
                .unwrap();
            assert!((0. ..=1. + 1e-9).contains(&lambda), "{lambda}");
        }
    }
}
