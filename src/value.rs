//! Value model module
//!
//! This module provides the data records that flow through expansion:
//! typed parameter values, the per-slot value-or-missing wrapper, and the
//! generated test case tuple.
//!
//! A [`TestCase`] is a pure data record. It has no behavior and no
//! identity beyond its position in the generated sequence; the embedding
//! harness owns everything that happens after expansion (invoking the test
//! body, recording pass/fail, rendering failures with the literal values).

use std::fmt;

/// A concrete parameter value
///
/// Each parameter slot holds values of a single semantic type; across
/// slots the types may differ, so generated tuples are heterogeneous.
/// Enumerated constants and dates are carried as their literal string
/// forms.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// String value (also used for enumerated constants and date literals)
    Str(String),
    /// Boolean value
    Bool(bool),
}

impl ParamValue {
    /// Render the value as a short literal for per-case diagnostics
    ///
    /// Long strings are truncated so generated case names stay readable.
    pub fn literal(&self) -> String {
        match self {
            ParamValue::Int(v) => v.to_string(),
            ParamValue::Float(v) => {
                let s = format!("{v:.2}");
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            }
            ParamValue::Str(v) => {
                if v.chars().count() > 20 {
                    let prefix: String = v.chars().take(17).collect();
                    format!("{prefix}...")
                } else {
                    v.clone()
                }
            }
            ParamValue::Bool(v) => v.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// One slot position of a generated test case
///
/// Sequential expansion pads exhausted slots with [`SlotValue::Missing`]
/// instead of silently reusing a value or substituting a type default.
/// The embedding harness decides whether a case containing the sentinel
/// is a pass, fail or skip; treating it as a hard error is recommended,
/// since it almost always signals mismatched slot arity.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    /// A concrete value drawn from the slot's sources
    Value(ParamValue),
    /// Explicit missing-value sentinel
    Missing,
}

impl SlotValue {
    /// Return the concrete value, if any
    pub fn value(&self) -> Option<&ParamValue> {
        match self {
            SlotValue::Value(v) => Some(v),
            SlotValue::Missing => None,
        }
    }

    /// Whether this slot carries the missing-value sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, SlotValue::Missing)
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Value(v) => write!(f, "{v}"),
            SlotValue::Missing => write!(f, "<missing>"),
        }
    }
}

/// An ordered tuple of concrete values, one per parameter slot
///
/// Optionally carries an expected-result value for comparison by the
/// caller. Cases are generated fresh per expansion call and are not
/// cached or shared across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    values: Vec<SlotValue>,
    expected: Option<ParamValue>,
}

impl TestCase {
    /// Create a test case from its slot values
    pub fn new(values: Vec<SlotValue>) -> Self {
        TestCase {
            values,
            expected: None,
        }
    }

    /// Attach an expected-result value
    #[must_use]
    pub fn with_expected(mut self, expected: ParamValue) -> Self {
        self.expected = Some(expected);
        self
    }

    /// The slot values in declaration order
    pub fn values(&self) -> &[SlotValue] {
        &self.values
    }

    /// The value at slot `index`, if the case has that many slots
    pub fn get(&self, index: usize) -> Option<&SlotValue> {
        self.values.get(index)
    }

    /// The expected-result value, if one was declared
    pub fn expected(&self) -> Option<&ParamValue> {
        self.expected.as_ref()
    }

    /// Number of slots in this case
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the case has no slots
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every slot carries a concrete value
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_missing())
    }

    /// Indices of slots carrying the missing-value sentinel
    pub fn missing_slots(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_missing().then_some(i))
            .collect()
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")?;
        if let Some(expected) = &self.expected {
            write!(f, " => {expected}")?;
        }
        Ok(())
    }
}
