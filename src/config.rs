use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    #[serde(default = "TrialConfig::default_seed")]
    pub seed: u64,
    #[serde(default = "TrialConfig::default_days")]
    pub days: usize,
    #[serde(default = "TrialConfig::default_trials")]
    pub trials: u64,
    #[serde(default = "TrialConfig::default_p_baseline")]
    pub p_baseline: f64,
    #[serde(default = "TrialConfig::default_drop_factor")]
    pub drop_factor: f64,
    #[serde(default = "TrialConfig::default_lift_factor")]
    pub lift_factor: f64,
}

impl TrialConfig {
    fn default_seed() -> u64 {
        7
    }
    fn default_days() -> usize {
        30
    }
    fn default_trials() -> u64 {
        5000
    }
    fn default_p_baseline() -> f64 {
        0.05
    }
    fn default_drop_factor() -> f64 {
        2.0 / 3.0
    }
    fn default_lift_factor() -> f64 {
        1.03
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            days: Self::default_days(),
            trials: Self::default_trials(),
            p_baseline: Self::default_p_baseline(),
            drop_factor: Self::default_drop_factor(),
            lift_factor: Self::default_lift_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "ChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "ChartConfig::default_height")]
    pub height: u32,
    #[serde(default = "ChartConfig::default_y_min")]
    pub y_min: f64,
    #[serde(default = "ChartConfig::default_y_max")]
    pub y_max: f64,
}

impl ChartConfig {
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        700
    }
    fn default_y_min() -> f64 {
        1.0
    }
    fn default_y_max() -> f64 {
        7.0
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            y_min: Self::default_y_min(),
            y_max: Self::default_y_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FigConfig {
    #[serde(default)]
    pub trial: TrialConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl FigConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
