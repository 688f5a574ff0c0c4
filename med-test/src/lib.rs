use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::min;

use med_types::*;

pub fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"", b""),
        (b"", b"abc"),
        (b"abc", b""),
        (b"a", b"a"),
        (b"ab", b"ba"),
        (b"shayan", b"daneshvar"),
        (b"daneshvar", b"shayan"),
        (b"kitten", b"sitting"),
        (b"intention", b"execution"),
        (b"aaaaaaaa", b"aaaa"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
    ]
}

const ALPHABET: &[u8] = b"ACGT";

/// A random sequence of length `n` over `ACGT`.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// Apply `ceil(e * n)` uniformly chosen substitutions, insertions and deletions to `a`.
pub fn mutate(a: Seq, e: f32, rng: &mut impl Rng) -> Sequence {
    let mut b = a.to_vec();
    let edits = (e * a.len() as f32).ceil() as usize;
    for _ in 0..edits {
        match rng.gen_range(0..3) {
            0 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b[i] = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            }
            1 if !b.is_empty() => {
                b.remove(rng.gen_range(0..b.len()));
            }
            _ => {
                let i = rng.gen_range(0..=b.len());
                b.insert(i, ALPHABET[rng.gen_range(0..ALPHABET.len())]);
            }
        }
    }
    b
}

/// Random pairs for a grid of lengths and error rates. The same seed always
/// gives the same pairs.
pub fn gen_seqs(seed: u64) -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32))> {
    let ns = [0usize, 1, 2, 3, 4, 5, 7, 10, 16, 20, 33, 50, 64, 100];
    let es = [0.0f32, 0.05, 0.10, 0.30, 0.50, 1.0];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ns.into_iter()
        .cartesian_product(es)
        .map(move |(n, e)| {
            let a = random_sequence(n, &mut rng);
            let b = mutate(&a, e, &mut rng);
            ((a, b), (n, e))
        })
}

/// Weighted edit distance using two rolling rows, as reference.
pub fn reference_dist(a: Seq, b: Seq, cm: &CostModel) -> Cost {
    let mut prev = (0..=b.len()).map(|j| j as Cost * cm.ins).collect_vec();
    let mut cur = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        cur[0] = (i + 1) as Cost * cm.del;
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = min(
                min(prev[j + 1] + cm.del, cur[j] + cm.ins),
                prev[j] + cm.match_cost(ca, cb),
            );
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Whether `after` is obtained from `before` by applying `op` at some position.
pub fn is_single_edit<T: PartialEq>(before: &[T], after: &[T], op: &EditOp<T>) -> bool {
    let prefix = before
        .iter()
        .zip(after)
        .take_while(|(x, y)| x == y)
        .count();
    match op {
        EditOp::Insert(x) => {
            after.len() == before.len() + 1
                && (0..=prefix).any(|p| &after[p] == x && after[p + 1..] == before[p..])
        }
        EditOp::Delete(x) => {
            before.len() == after.len() + 1
                && (0..=prefix).any(|p| &before[p] == x && before[p + 1..] == after[p..])
        }
        EditOp::Substitute(x, y) => {
            before.len() == after.len()
                && prefix < before.len()
                && &before[prefix] == x
                && &after[prefix] == y
                && before[prefix + 1..] == after[prefix + 1..]
        }
    }
}

/// Check all properties of a single alignment.
pub fn test_aligner_on_input(a: Seq, b: Seq, aligner: &impl Aligner, params: &str) {
    // Set to true for local debugging.
    const D: bool = false;
    if D {
        eprintln!("{params}\na {}\nb {}", seq_to_string(a), seq_to_string(b));
    }

    let cm = aligner.cost_model();
    let alignment = aligner
        .align(a, b)
        .unwrap_or_else(|e| panic!("{params}\n{aligner:?} failed: {e}"));
    let Alignment {
        cost,
        ops,
        snapshots,
    } = &alignment;

    let reference = reference_dist(a, b, cm);
    assert_eq!(
        *cost,
        reference,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
    if *cm == CostModel::unit() {
        assert_eq!(*cost, triple_accel::levenshtein_exp(a, b) as Cost);
    }
    assert_eq!(aligner.cost(a, b).unwrap(), *cost);

    // Deleting everything and inserting everything is always possible.
    assert!(*cost <= a.len() as Cost * cm.del + b.len() as Cost * cm.ins);
    assert_eq!(alignment.ops_cost(cm), *cost, "{params}\nops {ops:?}");

    assert_eq!(snapshots.len(), ops.len() + 1, "{params}");
    assert_eq!(snapshots.first().map(|s| &s[..]), Some(a), "{params}");
    assert_eq!(snapshots.last().map(|s| &s[..]), Some(b), "{params}");
    for ((before, after), op) in snapshots.iter().tuple_windows().zip(ops) {
        assert!(
            is_single_edit(before, after, op),
            "{params}\n{} -> {} is not {op:?}",
            seq_to_string(before),
            seq_to_string(after),
        );
    }
    if a == b {
        assert_eq!(*cost, 0);
        assert!(ops.is_empty());
    }
}

/// Test the given aligner on the hardcoded pairs and on random pairs:
/// - the cost must match `reference_dist`, and `triple_accel` for unit costs,
/// - the ops must sum to the cost,
/// - the snapshots must go from `a` to `b`, one op at a time.
pub fn test_aligner(aligner: impl Aligner) {
    test_aligner_up_to(aligner, usize::MAX);
}

/// As test_aligner, but only test sequences with n <= max_n.
pub fn test_aligner_up_to(aligner: impl Aligner, max_n: usize) {
    for (a, b) in test_sequences() {
        test_aligner_on_input(
            a,
            b,
            &aligner,
            &format!(
                "hardcoded test_sequences: a {:?} b {:?}",
                seq_to_string(a),
                seq_to_string(b)
            ),
        );
    }
    for seed in [31415, 27182] {
        for ((a, b), (n, e)) in gen_seqs(seed) {
            if n > max_n {
                continue;
            }
            test_aligner_on_input(
                &a,
                &b,
                &aligner,
                &format!("seed {seed:>10} n {n:>5} e {e:>.2}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_dist_known_values() {
        let cm = CostModel::default();
        assert_eq!(reference_dist(b"shayan", b"daneshvar", &cm), 9);
        assert_eq!(reference_dist(b"", b"abc", &cm), 3);
        assert_eq!(reference_dist(b"abc", b"", &cm), 3);
        assert_eq!(reference_dist(b"kitten", b"sitting", &CostModel::unit()), 3);
        let cm = CostModel::new(1, 3, 2).unwrap();
        assert_eq!(reference_dist(b"aaa", b"", &cm), 9);
        assert_eq!(reference_dist(b"", b"aaa", &cm), 6);
    }

    #[test]
    fn gen_seqs_is_deterministic() {
        let x = gen_seqs(7).collect_vec();
        let y = gen_seqs(7).collect_vec();
        assert_eq!(x, y);
        for ((a, b), (n, e)) in x {
            assert_eq!(a.len(), n);
            if e == 0.0 {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn single_edits() {
        assert!(is_single_edit(b"ab", b"aab", &EditOp::Insert(b'a')));
        assert!(is_single_edit(b"ab", b"abc", &EditOp::Insert(b'c')));
        assert!(!is_single_edit(b"ab", b"abc", &EditOp::Insert(b'a')));
        assert!(is_single_edit(b"abc", b"ac", &EditOp::Delete(b'b')));
        assert!(!is_single_edit(b"abc", b"ac", &EditOp::Delete(b'c')));
        assert!(is_single_edit(b"abc", b"axc", &EditOp::Substitute(b'b', b'x')));
        assert!(!is_single_edit(b"abc", b"abc", &EditOp::Substitute(b'b', b'b')));
    }
}
