//! case-expander library
//!
//! Deterministic, eagerly-validated expansion of parameterized test cases
//! from declared value sources.
//!
//! Value sources are registered explicitly, by value; slots concatenate
//! their sources in attachment order; one of three strategies turns the
//! slots into an ordered, finite, restartable case sequence. All
//! configuration errors surface before the first case is produced, and a
//! failing case never stops the remaining cases from being generated —
//! the expander only produces tuples, the embedding harness runs them.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use case_expander::{Expander, PlanBuilder, Strategy};
//!
//! let plan = PlanBuilder::new()
//!     .values("quantity", [1, 2])
//!     .values("culture", ["en-US", "de-DE"])
//!     .strategy(Strategy::Combinatorial)
//!     .build()?;
//!
//! let expander = Expander::new(plan);
//! assert_eq!(expander.case_count(), 4);
//!
//! for case in expander.cases() {
//!     println!("running {case}");
//! }
//! # Ok::<(), case_expander::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod expander;
mod pairwise;
pub mod value;

pub use config::{ExpansionPlan, ParameterSlot, ParameterSource, PlanBuilder, Strategy};
pub use error::{ConfigError, Result};
pub use expander::{Cases, Expander};
pub use value::{ParamValue, SlotValue, TestCase};
