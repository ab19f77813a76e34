//! Error handling module
//!
//! This module provides the unified error type for case expansion.
//!
//! All errors are configuration errors: they are detected eagerly, before
//! any test case is produced, and reported exactly once. Expansion itself
//! is a pure transformation and cannot fail mid-sequence. The Sequential
//! strategy's missing-value sentinel is deliberately *not* an error type —
//! it is a marker value ([`crate::SlotValue::Missing`]) that the embedding
//! harness interprets.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors detected before any test case is produced
///
/// A configuration error is fatal to the whole expansion: no partial
/// sequence is ever emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The plan declares no parameter slots at all
    #[error("expansion plan declares no parameter slots")]
    NoSlots,

    /// A slot's effective value sequence is empty
    #[error("parameter slot {slot} ('{name}') resolves to an empty value sequence")]
    EmptySlot { slot: usize, name: String },

    /// A strategy name did not match any recognized strategy
    #[error("unknown expansion strategy '{value}' (expected: combinatorial, sequential or pairwise)")]
    UnknownStrategy { value: String },

    /// Strict Sequential mode requires all slots to have equal length
    #[error("parameter slot {slot} ('{name}') has {len} values but strict sequential expansion expects {expected}")]
    ArityMismatch {
        slot: usize,
        name: String,
        len: usize,
        expected: usize,
    },

    /// The combinatorial case count does not fit in `usize`
    #[error("combinatorial case count over {slots} slots overflows the supported range")]
    CaseCountOverflow { slots: usize },
}

impl ConfigError {
    /// Create an empty-slot error for the given slot position
    pub fn empty_slot(slot: usize, name: impl Into<String>) -> Self {
        ConfigError::EmptySlot {
            slot,
            name: name.into(),
        }
    }

    /// Create an unknown-strategy error for an unrecognized name
    pub fn unknown_strategy(value: impl Into<String>) -> Self {
        ConfigError::UnknownStrategy {
            value: value.into(),
        }
    }
}
