//! Configuration module for case-expander
//!
//! This module provides the declaration layer of expansion: value sources,
//! parameter slots and the validated expansion plan, with strict error
//! handling and eager validation.
//!
//! # Architecture
//!
//! The declaration layer is built in two levels:
//!
//! - [`source`] - Value source and parameter slot records
//! - [`plan`] - Strategy selection and validated plan construction
//!
//! # Error Handling
//!
//! The declaration layer uses strict error handling:
//!
//! - A slot with an empty effective value sequence results in
//!   [`ConfigError`](crate::ConfigError), not an implicitly skipped slot
//! - An unrecognized strategy name results in `ConfigError`, not a
//!   fallback to the default strategy
//! - A strict-mode arity mismatch results in `ConfigError` at build time,
//!   not a sentinel-padded sequence at expansion time
//!
//! All validation runs in [`PlanBuilder::build`], before any test case is
//! produced, and each error is reported exactly once.
//!
//! # Usage
//!
//! ```rust
//! use case_expander::{PlanBuilder, Strategy};
//!
//! let plan = PlanBuilder::new()
//!     .values("quantity", [1, 2, 3])
//!     .values("culture", ["en-US", "de-DE"])
//!     .strategy(Strategy::Combinatorial)
//!     .build()?;
//!
//! assert_eq!(plan.slot_lengths(), vec![3, 2]);
//! # Ok::<(), case_expander::ConfigError>(())
//! ```

pub mod plan;
pub mod source;

pub use plan::{ExpansionPlan, PlanBuilder, Strategy};
pub use source::{ParameterSlot, ParameterSource};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::error::ConfigError;

    /// **What is tested:** Availability of all public declaration types through the module
    /// **Why it is tested:** Ensures the module re-exports everything an embedding harness needs to declare a plan
    /// **Test conditions:** Constructs each public type through the module interface
    /// **Expectations:** All public types are accessible and compose into a valid plan
    #[test]
    fn test_public_api_availability() {
        let source = ParameterSource::new("sizes", [1, 2]);
        let slot = ParameterSlot::named("size").with_source(source);

        let plan = PlanBuilder::new()
            .slot(slot)
            .strategy(Strategy::Pairwise)
            .build()
            .expect("valid plan");

        assert_eq!(plan.strategy(), Strategy::Pairwise);
        assert_eq!(plan.slots()[0].name(), "size");
    }

    /// **What is tested:** Declaration records implement the traits validation and testing rely on
    /// **Why it is tested:** Plans are cloned, compared and debug-printed by harness code and by this test suite
    /// **Test conditions:** Exercises Debug, Clone and PartialEq on plan, slot and source
    /// **Expectations:** All trait operations compile and preserve equality
    #[test]
    fn test_declaration_types_implement_required_traits() {
        let source = ParameterSource::new("s", ["a"]);
        let _debug = format!("{source:?}");
        assert_eq!(source.clone(), source);

        let slot = ParameterSlot::named("p").with_source(source);
        let _debug = format!("{slot:?}");
        assert_eq!(slot.clone(), slot);

        let plan = PlanBuilder::new().slot(slot).build().expect("valid plan");
        let _debug = format!("{plan:?}");
        assert_eq!(plan.clone(), plan);
    }

    /// **What is tested:** Validation failures leave no partial plan behind
    /// **Why it is tested:** Configuration errors are fatal to the whole expansion; a failed build must yield only the error
    /// **Test conditions:** Builds an invalid plan (empty slot) and matches the result
    /// **Expectations:** The result is exactly the configuration error, reported once
    #[test]
    fn test_failed_build_yields_only_error() {
        let result = PlanBuilder::new().slot(ParameterSlot::named("empty")).build();
        assert_eq!(result, Err(ConfigError::empty_slot(0, "empty")));
    }
}
