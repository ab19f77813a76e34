//! Shared test helpers for the case-expander integration suites
//!
//! Provides plan construction from slot-length shapes and decoding of
//! generated cases back into value indices, so suites can assert counts,
//! order and coverage without repeating declaration boilerplate.

use case_expander::{
    ExpansionPlan, ParamValue, PlanBuilder, SlotValue, Strategy, TestCase,
};

/// Encode value `j` of slot `i` as a distinct integer
///
/// Keeps every declared value unique across the whole plan so a produced
/// case can be decoded back into `(slot, index)` pairs.
#[allow(dead_code)]
pub fn encoded(slot: usize, index: usize) -> i64 {
    (slot as i64) * 100 + (index as i64)
}

/// Build a plan with the given slot lengths and strategy
///
/// Slot `i` is named `p{i}` and declares values `encoded(i, 0..len)`.
#[allow(dead_code)]
pub fn plan_from_lengths(lengths: &[usize], strategy: Strategy) -> ExpansionPlan {
    let mut builder = PlanBuilder::new().strategy(strategy);
    for (slot, &len) in lengths.iter().enumerate() {
        let values: Vec<i64> = (0..len).map(|j| encoded(slot, j)).collect();
        builder = builder.values(&format!("p{slot}"), values);
    }
    builder.build().expect("valid plan")
}

/// Decode a generated case into per-slot value indices
///
/// Missing sentinels decode to `None`.
#[allow(dead_code)]
pub fn decode_case(case: &TestCase) -> Vec<Option<usize>> {
    case.values()
        .iter()
        .enumerate()
        .map(|(slot, value)| match value {
            SlotValue::Value(ParamValue::Int(n)) => {
                let index = n - encoded(slot, 0);
                assert!(index >= 0, "value {n} does not belong to slot {slot}");
                Some(index as usize)
            }
            SlotValue::Value(other) => panic!("unexpected value {other:?} in slot {slot}"),
            SlotValue::Missing => None,
        })
        .collect()
}

/// Assert that `cases` covers every pairwise value-index combination
#[allow(dead_code)]
pub fn assert_pairwise_coverage(lengths: &[usize], cases: &[TestCase]) {
    let decoded: Vec<Vec<Option<usize>>> = cases.iter().map(decode_case).collect();
    for a in 0..lengths.len() {
        for b in (a + 1)..lengths.len() {
            for va in 0..lengths[a] {
                for vb in 0..lengths[b] {
                    assert!(
                        decoded
                            .iter()
                            .any(|t| t[a] == Some(va) && t[b] == Some(vb)),
                        "pair (slot {a}={va}, slot {b}={vb}) is not covered"
                    );
                }
            }
        }
    }
}
