//! Parameter source and slot declarations
//!
//! This module provides the declaration-side records: a [`ParameterSource`]
//! is an ordered, finite sequence of values, and a [`ParameterSlot`] is one
//! method-input position with one or more attached sources.
//!
//! Sources are registered explicitly, by value, at declaration time. There
//! is no name-based lookup of value-producing members: a source either
//! exists in the slot or it does not, so the "string doesn't match any
//! member" class of runtime failure cannot occur.

use crate::value::ParamValue;

/// An ordered, finite sequence of values for one parameter
///
/// Immutable once declared. The sequence may be empty at declaration time;
/// emptiness is rejected later, when the owning plan is built, so that the
/// error can name the slot position.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSource {
    name: String,
    values: Vec<ParamValue>,
}

impl ParameterSource {
    /// Declare a source from any sequence of convertible values
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        ParameterSource {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The source's declared name, used in diagnostics only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared values in order
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    /// Number of declared values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the source declares no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One method-input position with its attached value sources
///
/// The slot's effective value sequence is the concatenation of all
/// attached sources in attachment order. Duplicate values are kept; a
/// value declared twice is expanded twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSlot {
    index: usize,
    name: String,
    sources: Vec<ParameterSource>,
}

impl ParameterSlot {
    /// Declare an empty slot; sources are attached with [`Self::with_source`]
    ///
    /// The slot index is assigned by the plan builder from declaration
    /// order, left to right.
    pub fn named(name: impl Into<String>) -> Self {
        ParameterSlot {
            index: 0,
            name: name.into(),
            sources: Vec::new(),
        }
    }

    /// Attach one more source after any already attached
    #[must_use]
    pub fn with_source(mut self, source: ParameterSource) -> Self {
        self.sources.push(source);
        self
    }

    /// 0-based position of this slot, left-to-right declaration order
    pub fn index(&self) -> usize {
        self.index
    }

    /// The slot's declared name, used in diagnostics only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached sources in attachment order
    pub fn sources(&self) -> &[ParameterSource] {
        &self.sources
    }

    /// The effective value sequence: all sources concatenated
    pub fn effective_values(&self) -> impl Iterator<Item = &ParamValue> {
        self.sources.iter().flat_map(|s| s.values().iter())
    }

    /// Length of the effective value sequence
    pub fn effective_len(&self) -> usize {
        self.sources.iter().map(ParameterSource::len).sum()
    }

    pub(crate) fn assign_index(&mut self, index: usize) {
        self.index = index;
    }
}
