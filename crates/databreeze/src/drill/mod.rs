//! Scalar and batch drilling.
//!
//! The free functions use [`DrillConfig::default`](databreeze_core::DrillConfig).
//! Build a [`Driller`] to drill with a loaded config or to collect
//! [`DrillStats`].

pub mod batch;
pub mod driller;
pub mod scalar;

pub use batch::{drill, drill_field, drill_many, drill_many_or_absent, Batch, Drilled};
pub use driller::{DrillStats, Driller};
pub use scalar::{drill_one, drill_one_or_absent, probe};
