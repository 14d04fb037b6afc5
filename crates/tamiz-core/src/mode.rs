//! Filter mode selector.

/// The four filter behaviors, selected by a 2-bit field sampled fresh every
/// cycle. No mode history is retained — only the current cycle's mode governs
/// that cycle's output function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Direct pass-through of the most recent retained sample (`00`).
    #[default]
    Bypass,
    /// Unscaled 4-tap moving sum (`01`).
    Average,
    /// Weighted low-pass favoring recent samples (`10`).
    Weighted,
    /// First-difference high-pass with wrapping subtraction (`11`).
    Difference,
}

impl Mode {
    /// All modes in encoding order.
    pub const ALL: [Mode; 4] = [
        Mode::Bypass,
        Mode::Average,
        Mode::Weighted,
        Mode::Difference,
    ];

    /// Decode a mode from its 2-bit encoding. Bits above the low two are
    /// ignored, so every `u8` decodes to a valid mode — there is no invalid
    /// selector value.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Mode::Bypass,
            0b01 => Mode::Average,
            0b10 => Mode::Weighted,
            _ => Mode::Difference,
        }
    }

    /// The 2-bit encoding of this mode.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Mode::Bypass => 0b00,
            Mode::Average => 0b01,
            Mode::Weighted => 0b10,
            Mode::Difference => 0b11,
        }
    }

    /// Lower-case name, matching the stimulus file vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Bypass => "bypass",
            Mode::Average => "average",
            Mode::Weighted => "weighted",
            Mode::Difference => "difference",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_encodings() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_bits(mode.bits()), mode);
        }
    }

    #[test]
    fn test_high_bits_ignored() {
        // Any u8 is a legal selector; only the low two bits matter.
        assert_eq!(Mode::from_bits(0b100), Mode::Bypass);
        assert_eq!(Mode::from_bits(0xFD), Mode::Average);
        assert_eq!(Mode::from_bits(0xFE), Mode::Weighted);
        assert_eq!(Mode::from_bits(0xFF), Mode::Difference);
    }

    #[test]
    fn test_default_is_bypass() {
        assert_eq!(Mode::default(), Mode::Bypass);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Mode::Bypass.to_string(), "bypass");
        assert_eq!(Mode::Difference.to_string(), "difference");
    }
}
