//! Pairwise covering-array construction
//!
//! This module builds a deterministic pairwise cover over slot value
//! *indices*: every pair of values from every pair of slots appears
//! together in at least one produced tuple. Working on indices rather
//! than values keeps duplicate declared values distinct, as concatenation
//! semantics require.
//!
//! Exact minimal covering-array construction is NP-hard, so the builder
//! uses a greedy heuristic: seed each tuple from the lexicographically
//! first uncovered pair, then fill the remaining slots with the value
//! index that covers the most still-uncovered pairs, breaking ties toward
//! the lowest index. The cover is complete and deterministic; it is not
//! required to be minimal.

use std::collections::BTreeSet;

/// An uncovered pair: slots `a < b` holding value indices `va`, `vb`
type Pair = (usize, usize, usize, usize);

fn pair_key(a: usize, va: usize, b: usize, vb: usize) -> Pair {
    if a < b {
        (a, b, va, vb)
    } else {
        (b, a, vb, va)
    }
}

/// Build a complete pairwise cover for the given slot lengths
///
/// Every length must be at least 1; the plan validation upstream
/// guarantees this. A single-slot input has no slot pairs and degenerates
/// to one tuple per value.
pub(crate) fn cover(lengths: &[usize]) -> Vec<Vec<usize>> {
    let slots = lengths.len();
    if slots == 1 {
        return (0..lengths[0]).map(|v| vec![v]).collect();
    }

    // BTreeSet keeps the pair universe ordered, which makes the seeding
    // deterministic across runs.
    let mut uncovered: BTreeSet<Pair> = BTreeSet::new();
    for a in 0..slots {
        for b in (a + 1)..slots {
            for va in 0..lengths[a] {
                for vb in 0..lengths[b] {
                    uncovered.insert((a, b, va, vb));
                }
            }
        }
    }

    let mut tuples = Vec::new();
    while let Some(&(a, b, va, vb)) = uncovered.iter().next() {
        let mut partial: Vec<Option<usize>> = vec![None; slots];
        partial[a] = Some(va);
        partial[b] = Some(vb);

        for slot in 0..slots {
            if partial[slot].is_some() {
                continue;
            }
            let mut best_value = 0;
            let mut best_gain = gain(&uncovered, &partial, slot, 0);
            for value in 1..lengths[slot] {
                let candidate = gain(&uncovered, &partial, slot, value);
                if candidate > best_gain {
                    best_gain = candidate;
                    best_value = value;
                }
            }
            partial[slot] = Some(best_value);
        }

        let tuple: Vec<usize> = partial.into_iter().map(|v| v.unwrap_or(0)).collect();
        for x in 0..slots {
            for y in (x + 1)..slots {
                uncovered.remove(&pair_key(x, tuple[x], y, tuple[y]));
            }
        }
        tuples.push(tuple);
    }

    tuples
}

/// Number of still-uncovered pairs that assigning `value` to `slot`
/// would cover against the already-fixed slots
fn gain(uncovered: &BTreeSet<Pair>, partial: &[Option<usize>], slot: usize, value: usize) -> usize {
    partial
        .iter()
        .enumerate()
        .filter_map(|(other, assigned)| assigned.map(|v| (other, v)))
        .filter(|&(other, v)| uncovered.contains(&pair_key(slot, value, other, v)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_complete_cover(lengths: &[usize], tuples: &[Vec<usize>]) {
        for a in 0..lengths.len() {
            for b in (a + 1)..lengths.len() {
                for va in 0..lengths[a] {
                    for vb in 0..lengths[b] {
                        assert!(
                            tuples.iter().any(|t| t[a] == va && t[b] == vb),
                            "pair (slot {a}={va}, slot {b}={vb}) is not covered"
                        );
                    }
                }
            }
        }
    }

    /// **What is tested:** Complete coverage and size bound for a 3x2x2 shape
    /// **Why it is tested:** With three multi-valued slots the cover must stay strictly below the cross product while covering every pair
    /// **Test conditions:** Builds the cover for lengths [3, 2, 2] (product 12, theoretical minimum 6)
    /// **Expectations:** Every pairwise combination is covered and the tuple count is below 12
    #[test]
    fn test_three_slot_cover() {
        let lengths = [3, 2, 2];
        let tuples = cover(&lengths);

        assert_complete_cover(&lengths, &tuples);
        assert!(tuples.len() < 12, "cover of size {} is not below 12", tuples.len());
        assert!(tuples.len() >= 6);
    }

    /// **What is tested:** Two-slot covers equal the cross product
    /// **Why it is tested:** With exactly two slots every value pair must appear, so any valid cover has exactly n*m tuples
    /// **Test conditions:** Builds the cover for lengths [3, 2]
    /// **Expectations:** The cover has exactly 6 tuples and covers every pair
    #[test]
    fn test_two_slot_cover_is_product() {
        let lengths = [3, 2];
        let tuples = cover(&lengths);

        assert_complete_cover(&lengths, &tuples);
        assert_eq!(tuples.len(), 6);
    }

    /// **What is tested:** Single-slot degenerate cover
    /// **Why it is tested:** With one slot there are no slot pairs; every declared value must still appear once
    /// **Test conditions:** Builds the cover for lengths [4]
    /// **Expectations:** Four single-element tuples in index order
    #[test]
    fn test_single_slot_cover() {
        assert_eq!(cover(&[4]), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    /// **What is tested:** All-singleton slots collapse to one tuple
    /// **Why it is tested:** A single tuple covers every pair when each slot has one value
    /// **Test conditions:** Builds the cover for lengths [1, 1, 1]
    /// **Expectations:** Exactly one tuple of zeros
    #[test]
    fn test_singleton_slots() {
        assert_eq!(cover(&[1, 1, 1]), vec![vec![0, 0, 0]]);
    }

    /// **What is tested:** Determinism of the greedy construction
    /// **Why it is tested:** Expansion must be restartable; two runs over the same lengths must agree tuple for tuple
    /// **Test conditions:** Builds the cover for an uneven shape twice
    /// **Expectations:** Both runs produce identical tuple sequences
    #[test]
    fn test_cover_is_deterministic() {
        let lengths = [4, 3, 2, 3];
        assert_eq!(cover(&lengths), cover(&lengths));
    }

    /// **What is tested:** Coverage on a larger uneven shape stays below the product
    /// **Why it is tested:** The strict size bound must hold on shapes where it is combinatorially achievable
    /// **Test conditions:** Builds the cover for lengths [4, 3, 2, 3] (product 72)
    /// **Expectations:** Complete coverage with fewer than 72 tuples, at least the largest pair block (12)
    #[test]
    fn test_larger_cover() {
        let lengths = [4, 3, 2, 3];
        let tuples = cover(&lengths);

        assert_complete_cover(&lengths, &tuples);
        assert!(tuples.len() < 72);
        assert!(tuples.len() >= 12);
    }
}
