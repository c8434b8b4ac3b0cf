//! Game settings
//!
//! Loaded from a JSON file. None of these touch the difficulty ramp; they
//! only cover visuals, determinism and the default field size.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (slice and bomb bursts)
    pub particles: bool,

    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,

    /// Play field size used until the host reports its own
    pub field_width: f32,
    pub field_height: f32,

    /// Frames the headless demo runs before exiting
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            seed: None,
            field_width: 960.0,
            field_height: 540.0,
            demo_frames: 60 * 60,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "FRUIT_SLICE_SETTINGS";
    /// Environment variable overriding the quality preset (`low`, `medium`, `high`)
    pub const QUALITY_ENV: &'static str = "FRUIT_SLICE_QUALITY";

    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace the quality preset with a named one; unknown names are ignored
    pub fn with_quality_override(mut self, name: Option<&str>) -> Self {
        let Some(name) = name else {
            return self;
        };
        match QualityPreset::from_str(name) {
            Some(preset) => {
                log::info!("Quality override: {}", preset.as_str());
                self.quality = preset;
            }
            None => log::warn!(
                "Unknown quality preset '{}'; keeping {}",
                name,
                self.quality.as_str()
            ),
        }
        self
    }

    /// Load from the file named by `FRUIT_SLICE_SETTINGS`, or use defaults,
    /// then apply `FRUIT_SLICE_QUALITY` if set
    pub fn from_env() -> Self {
        let settings = match std::env::var(Self::PATH_ENV) {
            Ok(path) => Self::load(path),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        let quality = std::env::var(Self::QUALITY_ENV).ok();
        settings.with_quality_override(quality.as_deref())
    }
}
