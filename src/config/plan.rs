//! Expansion plan construction and validation
//!
//! This module provides the validated input to expansion: a
//! [`PlanBuilder`] collects slot declarations, the strategy and the
//! expansion options, and [`PlanBuilder::build`] performs all validation
//! eagerly, before any test case is produced.
//!
//! Validation is strict: an empty slot, a strict-mode arity mismatch or an
//! overflowing case count is a [`ConfigError`], never a silently adjusted
//! plan.

use std::fmt;
use std::str::FromStr;

use super::source::{ParameterSlot, ParameterSource};
use crate::error::{ConfigError, Result};
use crate::value::ParamValue;

/// Expansion strategy, selected once per plan
///
/// Applied uniformly across all slots of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Exhaustive cross product of all slot sequences (the default)
    #[default]
    Combinatorial,
    /// Index-aligned walk; exhausted slots carry the missing sentinel
    Sequential,
    /// Greedy covering of all pairwise value combinations
    Pairwise,
}

impl Strategy {
    /// The canonical strategy name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Combinatorial => "combinatorial",
            Strategy::Sequential => "sequential",
            Strategy::Pairwise => "pairwise",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Parse a declared strategy name, case-insensitively
    ///
    /// Anything other than the three recognized names is a configuration
    /// error; there is no fallback to the default.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combinatorial" => Ok(Strategy::Combinatorial),
            "sequential" => Ok(Strategy::Sequential),
            "pairwise" => Ok(Strategy::Pairwise),
            _ => Err(ConfigError::unknown_strategy(s)),
        }
    }
}

/// A validated, immutable expansion input
///
/// Built through [`PlanBuilder`]; every plan that exists has passed
/// validation, so expansion itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionPlan {
    slots: Vec<ParameterSlot>,
    strategy: Strategy,
    strict_sequential: bool,
    expected: Vec<ParamValue>,
}

impl ExpansionPlan {
    /// The declared slots in left-to-right order
    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    /// The selected expansion strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether strict Sequential mode was requested
    pub fn strict_sequential(&self) -> bool {
        self.strict_sequential
    }

    /// Declared expected-result values, paired with cases by output index
    pub fn expected_results(&self) -> &[ParamValue] {
        &self.expected
    }

    /// Effective value sequence lengths, one per slot
    pub fn slot_lengths(&self) -> Vec<usize> {
        self.slots.iter().map(ParameterSlot::effective_len).collect()
    }
}

/// Builder for [`ExpansionPlan`]
///
/// Collects declarations in order; all validation happens in
/// [`Self::build`].
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    slots: Vec<ParameterSlot>,
    strategy: Strategy,
    strict_sequential: bool,
    expected: Vec<ParamValue>,
}

impl PlanBuilder {
    /// Create an empty builder with the default strategy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a slot with a single inline source of the same name
    ///
    /// Shorthand for the common one-source case.
    #[must_use]
    pub fn values<I, V>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        self.slot(ParameterSlot::named(name).with_source(ParameterSource::new(name, values)))
    }

    /// Declare a slot with its attached sources
    #[must_use]
    pub fn slot(mut self, mut slot: ParameterSlot) -> Self {
        slot.assign_index(self.slots.len());
        self.slots.push(slot);
        self
    }

    /// Select the expansion strategy
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Request strict Sequential mode: unequal slot lengths become an
    /// eager configuration error instead of missing-value sentinels
    #[must_use]
    pub fn strict_sequential(mut self, strict: bool) -> Self {
        self.strict_sequential = strict;
        self
    }

    /// Declare expected-result values, paired with cases by output index
    #[must_use]
    pub fn expected_results<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        self.expected = values.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the declarations and produce the plan
    ///
    /// All configuration errors surface here, before any case exists:
    /// a plan with no slots, a slot with an empty effective sequence, a
    /// strict-mode arity mismatch, or a combinatorial case count that
    /// overflows `usize`.
    pub fn build(self) -> Result<ExpansionPlan> {
        if self.slots.is_empty() {
            return Err(ConfigError::NoSlots);
        }

        for slot in &self.slots {
            if slot.effective_len() == 0 {
                return Err(ConfigError::empty_slot(slot.index(), slot.name()));
            }
        }

        if self.strategy == Strategy::Sequential && self.strict_sequential {
            let expected = self.slots[0].effective_len();
            for slot in &self.slots[1..] {
                let len = slot.effective_len();
                if len != expected {
                    return Err(ConfigError::ArityMismatch {
                        slot: slot.index(),
                        name: slot.name().to_owned(),
                        len,
                        expected,
                    });
                }
            }
        }

        if self.strategy == Strategy::Combinatorial {
            let mut count: usize = 1;
            for slot in &self.slots {
                count = count.checked_mul(slot.effective_len()).ok_or(
                    ConfigError::CaseCountOverflow {
                        slots: self.slots.len(),
                    },
                )?;
            }
        }

        Ok(ExpansionPlan {
            slots: self.slots,
            strategy: self.strategy,
            strict_sequential: self.strict_sequential,
            expected: self.expected,
        })
    }
}
