//! Conformance runner: drives the core and the reference model in lockstep
//! over a stimulus and compares outputs cycle by cycle.

use thiserror::Error;

use crate::reference::ReferenceModel;
use crate::vectors::Stimulus;
use tamiz_core::{CycleInput, FilterCore, Mode};

/// A divergence between the core and the reference model.
///
/// Carries everything needed to reproduce the failing cycle by hand: the
/// applied inputs, the history the output was computed from, and both
/// outputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "cycle {cycle}: mode={mode} sample={sample} history={history:?} \
     expected={expected} actual={actual}"
)]
pub struct Mismatch {
    /// Zero-based cycle index of the divergence.
    pub cycle: usize,
    /// Mode applied on the failing cycle.
    pub mode: Mode,
    /// Sample applied on the failing cycle.
    pub sample: u8,
    /// History taps (newest first) before the failing cycle's shift.
    pub history: [u16; 4],
    /// Output of the reference model.
    pub expected: u8,
    /// Output of the core.
    pub actual: u8,
}

/// Result of a clean conformance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceReport {
    /// Number of cycles driven.
    pub cycles: usize,
    /// Output sample per cycle, in clock order.
    pub outputs: Vec<u8>,
}

/// One row of a cycle-by-cycle trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    /// Zero-based cycle index.
    pub cycle: usize,
    /// Inputs applied this cycle.
    pub input: CycleInput,
    /// History taps (newest first) before this cycle's shift.
    pub history: [u16; 4],
    /// Output latched this cycle.
    pub output: u8,
}

/// Drive both implementations over `stimulus` and compare every cycle.
///
/// Returns the output trace on success, or the first [`Mismatch`] on
/// divergence.
pub fn run_conformance(stimulus: &Stimulus) -> Result<ConformanceReport, Mismatch> {
    let profile = stimulus.profile.into();
    let mut core = FilterCore::with_profile(profile);
    let mut reference = ReferenceModel::new(profile);

    let mut outputs = Vec::with_capacity(stimulus.len());
    for (cycle, &record) in stimulus.cycles.iter().enumerate() {
        let input: CycleInput = record.into();
        let history = core.history().taps();

        let actual = core.step(input);
        let expected = reference.step(input);

        if actual != expected {
            return Err(Mismatch {
                cycle,
                mode: input.mode,
                sample: input.sample,
                history,
                expected,
                actual,
            });
        }
        outputs.push(actual);
    }

    Ok(ConformanceReport {
        cycles: outputs.len(),
        outputs,
    })
}

/// Drive the core over `stimulus` and record a per-cycle trace.
pub fn run_trace(stimulus: &Stimulus) -> Vec<TraceRow> {
    let mut core = FilterCore::with_profile(stimulus.profile.into());

    stimulus
        .cycles
        .iter()
        .enumerate()
        .map(|(cycle, &record)| {
            let input: CycleInput = record.into();
            let history = core.history().taps();
            let output = core.step(input);
            TraceRow {
                cycle,
                input,
                history,
                output,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::CycleRecord;
    use tamiz_core::Profile;

    fn spec_stimulus() -> Stimulus {
        let mut stimulus = Stimulus::new("spec-average").with_profile(Profile::FixedAverage);
        for s in [4, 8, 12, 16, 0, 0] {
            stimulus.push(CycleRecord::active(s, Mode::Average));
        }
        stimulus
    }

    #[test]
    fn test_conformance_passes_on_spec_vector() {
        let report = run_conformance(&spec_stimulus()).expect("implementations must agree");
        assert_eq!(report.cycles, 6);
        assert_eq!(report.outputs, vec![1, 3, 6, 10, 9, 7]);
    }

    #[test]
    fn test_conformance_covers_resets_and_freezes() {
        let mut stimulus = Stimulus::new("control-lines");
        stimulus.push(CycleRecord::active(63, Mode::Weighted));
        stimulus.push(CycleRecord::reset());
        stimulus.push(CycleRecord::reset());
        let mut frozen = CycleRecord::active(12, Mode::Difference);
        frozen.enable = false;
        stimulus.push(frozen);
        stimulus.push(CycleRecord::active(40, Mode::Average));

        let report = run_conformance(&stimulus).expect("implementations must agree");
        assert_eq!(report.cycles, 5);
    }

    #[test]
    fn test_trace_shows_pre_shift_history() {
        let rows = run_trace(&spec_stimulus());
        assert_eq!(rows[0].history, [0, 0, 0, 0]);
        assert_eq!(rows[1].history, [4, 0, 0, 0]);
        assert_eq!(rows[4].history, [16, 12, 8, 4]);
        // Fixed-average output is over the post-shift window [0, 16, 12, 8]
        assert_eq!(rows[4].output, 9);
    }

    #[test]
    fn test_mismatch_display_names_the_cycle() {
        let mismatch = Mismatch {
            cycle: 3,
            mode: Mode::Difference,
            sample: 7,
            history: [0, 63, 0, 0],
            expected: 255,
            actual: 0,
        };
        let msg = mismatch.to_string();
        assert!(msg.contains("cycle 3"), "got: {msg}");
        assert!(msg.contains("difference"), "got: {msg}");
        assert!(msg.contains("expected=255"), "got: {msg}");
    }
}
