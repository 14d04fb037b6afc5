//! Tamiz Model - verification support for the filter core.
//!
//! Three pieces:
//!
//! - [`ReferenceModel`] - an independent, deliberately naive software model
//!   of the core, used as the comparison oracle
//! - [`Stimulus`] / [`CycleRecord`] - the stimulus file format (TOML or
//!   JSON) describing a run cycle by cycle
//! - [`run_conformance`] / [`run_trace`] - drive the real core and the
//!   reference in lockstep, reporting the first [`Mismatch`] with full
//!   context (cycle, inputs, prior history, both outputs)
//!
//! The external driver contract matches the core: one `step` per logical
//! clock edge, outputs valid one cycle after the corresponding input.

pub mod conformance;
pub mod error;
pub mod reference;
pub mod vectors;

pub use conformance::{ConformanceReport, Mismatch, TraceRow, run_conformance, run_trace};
pub use error::ModelError;
pub use reference::ReferenceModel;
pub use vectors::{CycleRecord, ModeName, ProfileName, Stimulus};
