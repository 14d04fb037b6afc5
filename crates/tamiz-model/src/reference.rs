//! Independent software reference model of the filter core.
//!
//! Deliberately written the most obvious way — a plain vector shifted by
//! insert-and-truncate, widened signed arithmetic then a mask — and sharing
//! no code with `tamiz_core`, so the two implementations can check each
//! other. Anywhere the core's bit-level tricks and this model disagree, one
//! of them is wrong.

use tamiz_core::{CycleInput, Mode, Profile};

const SAMPLE_MASK: i64 = 0x3F;
const INTERMEDIATE_MODULUS: i64 = 1 << 16;

/// Naive cycle-accurate model of the core, used as the comparison oracle.
///
/// Same `step` protocol and reset/enable semantics as
/// [`tamiz_core::FilterCore`]: compute from the pre-shift history, latch,
/// then absorb the sample.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    hist: Vec<i64>,
    output: u8,
    profile: Profile,
}

impl ReferenceModel {
    /// Create a reference model in the reset state.
    pub fn new(profile: Profile) -> Self {
        Self {
            hist: vec![0; 4],
            output: 0,
            profile,
        }
    }

    /// Advance one clock edge and return this cycle's output.
    pub fn step(&mut self, input: CycleInput) -> u8 {
        if input.reset {
            self.hist = vec![0; 4];
            self.output = 0;
            return 0;
        }
        if !input.enable {
            return self.output;
        }

        let sample = i64::from(input.sample) & SAMPLE_MASK;

        self.output = match self.profile {
            Profile::ModeDispatch => {
                // Registered output: read the taps before this cycle's shift.
                let (x0, x1, x2, x3) =
                    (self.hist[0], self.hist[1], self.hist[2], self.hist[3]);
                let y = match input.mode {
                    Mode::Bypass => x0,
                    Mode::Average => x0 + x1 + x2 + x3,
                    Mode::Weighted => 4 * x0 + 2 * x1 + x2 + x3,
                    Mode::Difference => x0 - x1,
                };
                self.hist.insert(0, sample);
                self.hist.truncate(4);
                // 16-bit truncation, then the upper byte
                let masked = y.rem_euclid(INTERMEDIATE_MODULUS);
                (masked >> 8) as u8
            }
            Profile::FixedAverage => {
                // Calibration variant: shift first, then average — the
                // window includes this cycle's sample.
                self.hist.insert(0, sample);
                self.hist.truncate(4);
                ((self.hist[0] + self.hist[1] + self.hist[2] + self.hist[3]) >> 2) as u8
            }
        };

        self.output
    }

    /// The currently latched output.
    pub fn output(&self) -> u8 {
        self.output
    }

    /// The four history taps, newest first.
    pub fn taps(&self) -> [u16; 4] {
        [
            self.hist[0] as u16,
            self.hist[1] as u16,
            self.hist[2] as u16,
            self.hist[3] as u16,
        ]
    }
}
