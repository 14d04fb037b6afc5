//! Cycle-stepped filter core: history register, output latch, and the
//! reset/enable sequencing around the combinational engine.

use crate::engine::{self, SAMPLE_MASK};
use crate::history::HistoryBuffer;
use crate::mode::Mode;

/// Engine variant selection.
///
/// The two variants are profiles of the same history/engine architecture,
/// differing only in which kernel runs and how the result is scaled on the
/// way out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// Four-function engine: the per-cycle [`Mode`] selects the kernel and
    /// the output is the upper byte of the 16-bit intermediate.
    #[default]
    ModeDispatch,
    /// Single fixed behavior: 4-tap moving average `sum >> 2`, exposed
    /// directly as the full 8-bit value. The per-cycle mode is ignored, and
    /// the averaged window is read *after* the shift, so the current cycle's
    /// sample is part of it.
    FixedAverage,
}

/// One cycle's worth of inputs, as sampled at the clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleInput {
    /// When false the core freezes: no state change, no new computation.
    pub enable: bool,
    /// Level-sensitive synchronous reset. While asserted, history and output
    /// are forced to zero and no shifts occur.
    pub reset: bool,
    /// Raw input sample; masked to the 6-bit sample width on capture.
    pub sample: u8,
    /// Filter function for this cycle. Ignored under [`Profile::FixedAverage`].
    pub mode: Mode,
}

impl CycleInput {
    /// An enabled, non-reset cycle applying `sample` under `mode`.
    pub const fn active(sample: u8, mode: Mode) -> Self {
        Self {
            enable: true,
            reset: false,
            sample,
            mode,
        }
    }

    /// A cycle with reset asserted. Sample and mode are don't-cares.
    pub const fn reset() -> Self {
        Self {
            enable: true,
            reset: true,
            sample: 0,
            mode: Mode::Bypass,
        }
    }
}

/// Cycle-accurate model of the filter core.
///
/// One call to [`step`](FilterCore::step) is one clock edge. Per active
/// cycle the core:
///
/// 1. computes the output from the history *as it stood before this cycle*
///    (the current sample never influences the same cycle's output),
/// 2. latches that output,
/// 3. shifts the current sample into the history.
///
/// This registered-output ordering gives the core its one-cycle pipeline
/// latency and is the central correctness invariant.
///
/// Under [`Profile::FixedAverage`] the exposed average is instead taken
/// after the shift — the window includes the current sample, matching that
/// variant's calibration convention. History evolution is identical either
/// way.
///
/// # Example
///
/// ```rust
/// use tamiz_core::{CycleInput, FilterCore, Mode};
///
/// let mut core = FilterCore::new();
/// // History starts at zero, so the first bypass output is 0.
/// assert_eq!(core.step(CycleInput::active(16, Mode::Bypass)), 0);
/// // The 16 from the previous cycle is now x0.
/// assert_eq!(core.step(CycleInput::active(32, Mode::Bypass)), 0);
/// assert_eq!(core.history().x0(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCore {
    history: HistoryBuffer,
    output: u8,
    profile: Profile,
}

impl FilterCore {
    /// Create a core in the reset state using the primary mode-dispatch
    /// profile.
    pub const fn new() -> Self {
        Self::with_profile(Profile::ModeDispatch)
    }

    /// Create a core in the reset state with an explicit profile.
    pub const fn with_profile(profile: Profile) -> Self {
        Self {
            history: HistoryBuffer::new(),
            output: 0,
            profile,
        }
    }

    /// Advance one clock edge and return the output sample latched for this
    /// cycle.
    pub fn step(&mut self, input: CycleInput) -> u8 {
        if input.reset {
            self.history.reset();
            self.output = 0;
            #[cfg(feature = "tracing")]
            tracing::trace!("held in reset");
            return self.output;
        }
        if !input.enable {
            // Frozen: output holds its last latched value.
            return self.output;
        }

        let sample = u16::from(input.sample) & SAMPLE_MASK;
        self.output = match self.profile {
            Profile::ModeDispatch => {
                // Registered output: computed from the pre-shift history only.
                let out = engine::output_byte(engine::compute(input.mode, &self.history));
                self.history.shift(sample);
                out
            }
            Profile::FixedAverage => {
                // Calibration variant: the average is read off the window
                // after the shift, current sample included.
                self.history.shift(sample);
                engine::fixed_average(&self.history)
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            mode = %input.mode,
            sample = input.sample,
            output = self.output,
            "cycle"
        );

        self.output
    }

    /// Force the reset state directly (equivalent to a cycle with reset
    /// asserted).
    pub fn reset(&mut self) {
        self.history.reset();
        self.output = 0;
    }

    /// The currently latched output sample.
    pub fn output(&self) -> u8 {
        self.output
    }

    /// The history buffer as of the last completed cycle.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The configured engine profile.
    pub fn profile(&self) -> Profile {
        self.profile
    }
}
