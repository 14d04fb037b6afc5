//! Tamiz Core - cycle-accurate model of a 4-tap quantized filter core.
//!
//! The modeled hardware is a tiny synchronous filter: a 4-slot history of
//! recent input samples, a combinational engine computing one of four filter
//! functions per clock edge, and a registered output. This crate reproduces
//! that contract exactly in software — same fixed-point truncation, same
//! wrapping arithmetic, same one-cycle pipeline latency, same reset and
//! enable sequencing — so it can serve as a simulation model, a unit-test
//! oracle, or an embedded DSP routine.
//!
//! # Core Abstractions
//!
//! - [`HistoryBuffer`] - ordered delay line of the 4 most recent samples
//! - [`Mode`] - 2-bit filter function selector (all encodings legal)
//! - [`FilterCore`] - the stepped core: one [`step`](FilterCore::step) call
//!   per logical clock edge
//! - [`Profile`] - selects the 4-function engine or the single fixed-average
//!   calibration variant
//! - [`engine`] - the pure combinational kernels, usable standalone
//!
//! # Cycle semantics
//!
//! A clock edge maps to one `step` call: the output is computed from the
//! history *before* the current sample is absorbed, then the sample is
//! shifted in. (The fixed-average calibration variant instead reads its
//! window after the shift; see [`Profile`].) A single-threaded loop calling
//! `step` in sequence reproduces all of the hardware's observable behavior.
//!
//! ```rust
//! use tamiz_core::{CycleInput, FilterCore, Mode};
//!
//! let mut core = FilterCore::new();
//! for sample in [4, 8, 12, 16] {
//!     let out = core.step(CycleInput::active(sample, Mode::Average));
//!     // out reflects the previous cycles' samples only
//!     let _ = out;
//! }
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! tamiz-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Cycle-accurate**: state updates and output latching match the
//!   hardware's registered-output ordering exactly
//! - **Total**: every input across its declared bit width is legal; nothing
//!   traps, saturates, or errors
//! - **Allocation-free**: fixed-size state, no heap use anywhere

#![cfg_attr(not(feature = "std"), no_std)]

pub mod core;
pub mod engine;
pub mod history;
pub mod mode;

pub use crate::core::{CycleInput, FilterCore, Profile};
pub use engine::{INTERMEDIATE_BITS, OUTPUT_SHIFT, SAMPLE_BITS, SAMPLE_MASK};
pub use history::{HISTORY_DEPTH, HistoryBuffer};
pub use mode::Mode;
