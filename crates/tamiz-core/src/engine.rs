//! Pure per-mode arithmetic of the filter engine.
//!
//! Every function here is a combinational kernel: a pure function of the mode
//! selector and the four history taps, with no state of its own. The cycle
//! sequencing (compute before shift, output latch, reset) lives in
//! [`crate::FilterCore`].
//!
//! # Fixed-point policy
//!
//! All arithmetic is unsigned and masked to 16 bits. Overflow wraps silently,
//! and a mathematically negative first difference wraps modulo 2^16 rather
//! than clamping, saturating, or trapping. The externally visible output is
//! the upper byte of the 16-bit intermediate — a right-shifted view, with no
//! rounding adjustment of any kind.

use crate::history::HistoryBuffer;
use crate::mode::Mode;

/// Width of a raw input sample in bits.
pub const SAMPLE_BITS: u32 = 6;

/// Mask applied to input samples on capture.
pub const SAMPLE_MASK: u16 = (1 << SAMPLE_BITS) - 1;

/// Width of the 16-bit intermediate result in bits.
pub const INTERMEDIATE_BITS: u32 = 16;

/// Right shift selecting the externally visible byte of the intermediate.
pub const OUTPUT_SHIFT: u32 = 8;

/// Compute the 16-bit intermediate for `mode` over the given history.
///
/// The history must be the state *before* the current cycle's sample is
/// absorbed; the caller is responsible for that ordering.
#[inline]
pub fn compute(mode: Mode, history: &HistoryBuffer) -> u16 {
    let [x0, x1, x2, x3] = history.taps();
    match mode {
        Mode::Bypass => x0,
        Mode::Average => x0
            .wrapping_add(x1)
            .wrapping_add(x2)
            .wrapping_add(x3),
        // 4*x0 + 2*x1 + x2 + x3, all mod 2^16
        Mode::Weighted => (x0 << 2)
            .wrapping_add(x1 << 1)
            .wrapping_add(x2)
            .wrapping_add(x3),
        Mode::Difference => x0.wrapping_sub(x1),
    }
}

/// Extract the externally visible output byte from a 16-bit intermediate.
#[inline]
pub fn output_byte(intermediate: u16) -> u8 {
    (intermediate >> OUTPUT_SHIFT) as u8
}

/// The fixed-average kernel of the single-mode calibration variant:
/// `floor((x0 + x1 + x2 + x3) / 4)`, exposed directly with no byte
/// selection.
///
/// With 6-bit samples the sum is at most 252, so the result always fits the
/// 8-bit output.
#[inline]
pub fn fixed_average(history: &HistoryBuffer) -> u8 {
    let [x0, x1, x2, x3] = history.taps();
    let sum = x0
        .wrapping_add(x1)
        .wrapping_add(x2)
        .wrapping_add(x3);
    (sum >> 2) as u8
}
