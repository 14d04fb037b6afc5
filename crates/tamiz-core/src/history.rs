//! Four-tap sample history for the filter core.
//!
//! The hardware equivalent is a bank of four sample-wide registers wired as a
//! shift chain: every active clock edge the newest sample enters at `x0` and
//! the oldest (`x3`) falls off the end. This module models that chain as a
//! fixed array with no allocation.

/// Number of retained samples. The filter window is exactly this deep; older
/// inputs are unrecoverable.
pub const HISTORY_DEPTH: usize = 4;

/// Ordered delay line of the four most recent input samples.
///
/// Slot 0 (`x0`) is the most recent sample, slot 3 (`x3`) the oldest retained
/// one. A shift evicts `x3` unconditionally.
///
/// Samples are stored widened to `u16` so the engine can do its 16-bit
/// wrapping arithmetic directly on the taps; the capture path masks inputs to
/// the declared sample width before they get here.
///
/// # Example
///
/// ```rust
/// use tamiz_core::HistoryBuffer;
///
/// let mut history = HistoryBuffer::new();
/// history.shift(7);
/// history.shift(9);
/// assert_eq!(history.taps(), [9, 7, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    taps: [u16; HISTORY_DEPTH],
}

impl HistoryBuffer {
    /// Create a history buffer with all slots at zero (the reset state).
    pub const fn new() -> Self {
        Self {
            taps: [0; HISTORY_DEPTH],
        }
    }

    /// Push `sample` as the new `x0`; every other slot moves down one
    /// position and the old `x3` is dropped.
    ///
    /// Total over the full sample range; observable only through subsequent
    /// tap reads.
    #[inline]
    pub fn shift(&mut self, sample: u16) {
        self.taps[3] = self.taps[2];
        self.taps[2] = self.taps[1];
        self.taps[1] = self.taps[0];
        self.taps[0] = sample;
    }

    /// Force all four slots to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.taps = [0; HISTORY_DEPTH];
    }

    /// All four taps, newest first: `[x0, x1, x2, x3]`.
    #[inline]
    pub fn taps(&self) -> [u16; HISTORY_DEPTH] {
        self.taps
    }

    /// Most recent retained sample.
    #[inline]
    pub fn x0(&self) -> u16 {
        self.taps[0]
    }

    /// Second most recent retained sample.
    #[inline]
    pub fn x1(&self) -> u16 {
        self.taps[1]
    }

    /// Third most recent retained sample.
    #[inline]
    pub fn x2(&self) -> u16 {
        self.taps[2]
    }

    /// Oldest retained sample.
    #[inline]
    pub fn x3(&self) -> u16 {
        self.taps[3]
    }
}
