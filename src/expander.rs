//! Case expansion module
//!
//! This module provides the expander itself: it turns a validated
//! [`ExpansionPlan`] into a lazy, finite, ordered sequence of
//! [`TestCase`] values under the plan's strategy.
//!
//! Expansion is a pure function of the plan. The produced sequence is
//! restartable: calling [`Expander::cases`] again replays the identical
//! sequence in the identical order. Nothing is cached across calls and
//! nothing is shared between callers, so independent expanders may run
//! concurrently without synchronization.

use crate::config::{ExpansionPlan, ParameterSlot, PlanBuilder, Strategy};
use crate::error::Result;
use crate::pairwise;
use crate::value::{ParamValue, SlotValue, TestCase};

/// Expands a validated plan into test cases
///
/// Holds only immutable plan data; the expander is freely shareable and
/// reusable.
#[derive(Debug, Clone)]
pub struct Expander {
    plan: ExpansionPlan,
}

impl Expander {
    /// Create an expander over an already-validated plan
    pub fn new(plan: ExpansionPlan) -> Self {
        Expander { plan }
    }

    /// Convenience constructor: validate slots and strategy, then expand
    ///
    /// Equivalent to building the plan through [`PlanBuilder`]; every
    /// configuration error surfaces here, before any case is produced.
    pub fn from_parts(slots: Vec<ParameterSlot>, strategy: Strategy) -> Result<Self> {
        let mut builder = PlanBuilder::new().strategy(strategy);
        for slot in slots {
            builder = builder.slot(slot);
        }
        Ok(Expander::new(builder.build()?))
    }

    /// The plan this expander was built from
    pub fn plan(&self) -> &ExpansionPlan {
        &self.plan
    }

    /// Exact number of cases the next [`Self::cases`] call will produce
    ///
    /// The combinatorial product of slot lengths, the maximum slot length,
    /// or the computed pairwise cover size, depending on the strategy.
    pub fn case_count(&self) -> usize {
        let lengths = self.plan.slot_lengths();
        match self.plan.strategy() {
            // The product fits in usize: build() already checked it.
            Strategy::Combinatorial => lengths.iter().product(),
            Strategy::Sequential => lengths.iter().copied().max().unwrap_or(0),
            Strategy::Pairwise => pairwise::cover(&lengths).len(),
        }
    }

    /// Produce the case sequence for this plan
    pub fn cases(&self) -> Cases<'_> {
        let values: Vec<Vec<&ParamValue>> = self
            .plan
            .slots()
            .iter()
            .map(|slot| slot.effective_values().collect())
            .collect();

        let state = match self.plan.strategy() {
            Strategy::Combinatorial => State::Combinatorial {
                odometer: vec![0; values.len()],
                done: false,
            },
            Strategy::Sequential => State::Sequential {
                index: 0,
                max: values.iter().map(Vec::len).max().unwrap_or(0),
            },
            Strategy::Pairwise => State::Pairwise {
                tuples: pairwise::cover(&values.iter().map(Vec::len).collect::<Vec<_>>()),
                position: 0,
            },
        };

        Cases {
            values,
            expected: self.plan.expected_results(),
            state,
            produced: 0,
        }
    }
}

/// Lazy, finite iterator over the cases of one expansion call
///
/// Created by [`Expander::cases`]. Dropping the iterator mid-sequence has
/// no effect on later calls.
#[derive(Debug)]
pub struct Cases<'a> {
    values: Vec<Vec<&'a ParamValue>>,
    expected: &'a [ParamValue],
    state: State,
    produced: usize,
}

#[derive(Debug)]
enum State {
    Combinatorial { odometer: Vec<usize>, done: bool },
    Sequential { index: usize, max: usize },
    Pairwise { tuples: Vec<Vec<usize>>, position: usize },
}

impl Cases<'_> {
    fn finish_case(&mut self, slot_values: Vec<SlotValue>) -> TestCase {
        let mut case = TestCase::new(slot_values);
        if let Some(expected) = self.expected.get(self.produced) {
            case = case.with_expected(expected.clone());
        }
        self.produced += 1;
        case
    }
}

impl Iterator for Cases<'_> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        match &mut self.state {
            State::Combinatorial { odometer, done } => {
                if *done {
                    return None;
                }
                let slot_values: Vec<SlotValue> = odometer
                    .iter()
                    .enumerate()
                    .map(|(slot, &value)| SlotValue::Value(self.values[slot][value].clone()))
                    .collect();

                // Mixed-radix increment, rightmost slot varies fastest.
                let mut carried = true;
                for slot in (0..odometer.len()).rev() {
                    odometer[slot] += 1;
                    if odometer[slot] < self.values[slot].len() {
                        carried = false;
                        break;
                    }
                    odometer[slot] = 0;
                }
                if carried {
                    *done = true;
                }

                Some(self.finish_case(slot_values))
            }
            State::Sequential { index, max } => {
                if *index >= *max {
                    return None;
                }
                let k = *index;
                *index += 1;
                let slot_values: Vec<SlotValue> = self
                    .values
                    .iter()
                    .map(|slot| match slot.get(k) {
                        Some(&value) => SlotValue::Value(value.clone()),
                        // Never wraps around and never reuses the last
                        // value; the sentinel stays visible to the caller.
                        None => SlotValue::Missing,
                    })
                    .collect();

                Some(self.finish_case(slot_values))
            }
            State::Pairwise { tuples, position } => {
                let tuple = tuples.get(*position)?;
                *position += 1;
                let slot_values: Vec<SlotValue> = tuple
                    .iter()
                    .enumerate()
                    .map(|(slot, &value)| SlotValue::Value(self.values[slot][value].clone()))
                    .collect();

                Some(self.finish_case(slot_values))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.state {
            State::Combinatorial { done, .. } => {
                if *done {
                    0
                } else {
                    let total: usize = self.values.iter().map(Vec::len).product();
                    total - self.produced
                }
            }
            State::Sequential { index, max } => max - index,
            State::Pairwise { tuples, position } => tuples.len() - position,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cases<'_> {}
