//! Stimulus file format.
//!
//! A stimulus describes one run of the core: the engine profile and a list of
//! per-cycle input records. Files are TOML or JSON, keyed on extension.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ModelError;
use tamiz_core::{CycleInput, Mode, Profile};

/// Serialized spelling of [`Mode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    /// `"bypass"`
    #[default]
    Bypass,
    /// `"average"`
    Average,
    /// `"weighted"`
    Weighted,
    /// `"difference"`
    Difference,
}

impl From<ModeName> for Mode {
    fn from(name: ModeName) -> Self {
        match name {
            ModeName::Bypass => Mode::Bypass,
            ModeName::Average => Mode::Average,
            ModeName::Weighted => Mode::Weighted,
            ModeName::Difference => Mode::Difference,
        }
    }
}

impl From<Mode> for ModeName {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bypass => ModeName::Bypass,
            Mode::Average => ModeName::Average,
            Mode::Weighted => ModeName::Weighted,
            Mode::Difference => ModeName::Difference,
        }
    }
}

/// Serialized spelling of [`Profile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileName {
    /// `"mode-dispatch"` — the primary 4-function engine.
    #[default]
    ModeDispatch,
    /// `"fixed-average"` — the single-mode calibration variant.
    FixedAverage,
}

impl From<ProfileName> for Profile {
    fn from(name: ProfileName) -> Self {
        match name {
            ProfileName::ModeDispatch => Profile::ModeDispatch,
            ProfileName::FixedAverage => Profile::FixedAverage,
        }
    }
}

impl From<Profile> for ProfileName {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::ModeDispatch => ProfileName::ModeDispatch,
            Profile::FixedAverage => ProfileName::FixedAverage,
        }
    }
}

/// One cycle's inputs as stored in a stimulus file.
///
/// Every field has a default so simple stimuli stay terse: an enabled,
/// non-reset bypass cycle only needs its `sample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Enable line for this cycle (default true).
    #[serde(default = "default_enable")]
    pub enable: bool,

    /// Reset line for this cycle (default false).
    #[serde(default)]
    pub reset: bool,

    /// Input sample (default 0). Masked to 6 bits by the core on capture.
    #[serde(default)]
    pub sample: u8,

    /// Filter function for this cycle (default bypass).
    #[serde(default)]
    pub mode: ModeName,
}

fn default_enable() -> bool {
    true
}

impl CycleRecord {
    /// An enabled, non-reset cycle.
    pub fn active(sample: u8, mode: Mode) -> Self {
        Self {
            enable: true,
            reset: false,
            sample,
            mode: mode.into(),
        }
    }

    /// A cycle with reset asserted.
    pub fn reset() -> Self {
        Self {
            enable: true,
            reset: true,
            sample: 0,
            mode: ModeName::Bypass,
        }
    }
}

impl From<CycleRecord> for CycleInput {
    fn from(record: CycleRecord) -> Self {
        CycleInput {
            enable: record.enable,
            reset: record.reset,
            sample: record.sample,
            mode: record.mode.into(),
        }
    }
}

/// Stimulus file: a named run of the core.
///
/// # TOML Format
///
/// ```toml
/// name = "impulse"
/// profile = "mode-dispatch"
///
/// [[cycles]]
/// reset = true
///
/// [[cycles]]
/// sample = 63
/// mode = "average"
///
/// [[cycles]]
/// mode = "difference"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stimulus {
    /// Name of the stimulus.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Engine profile to run under (default mode-dispatch).
    #[serde(default)]
    pub profile: ProfileName,

    /// Per-cycle input records, in clock order.
    #[serde(default)]
    pub cycles: Vec<CycleRecord>,
}

impl Stimulus {
    /// Create a new empty stimulus under the primary profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            profile: ProfileName::ModeDispatch,
            cycles: Vec::new(),
        }
    }

    /// Set the engine profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a cycle record.
    pub fn push(&mut self, record: CycleRecord) {
        self.cycles.push(record);
    }

    /// Number of cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// True if the stimulus has no cycles.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Load a stimulus from a `.toml` or `.json` file. The extension is
    /// matched case-insensitively.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ModelError::read_file(path, e))?;
        match extension(path).as_deref() {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ModelError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Save the stimulus to a `.toml` or `.json` file. The extension is
    /// matched case-insensitively.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let content = match extension(path).as_deref() {
            Some("toml") => toml::to_string_pretty(self)?,
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => return Err(ModelError::UnsupportedFormat(path.to_path_buf())),
        };
        std::fs::write(path, content).map_err(|e| ModelError::write_file(path, e))?;
        Ok(())
    }

    /// Parse a stimulus from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ModelError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the stimulus to a TOML string.
    pub fn to_toml(&self) -> Result<String, ModelError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
