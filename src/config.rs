//! TOML configuration for the `triton` binary.
//!
//! The file maps one-to-one onto [`triton_engine::Config`]; every analysis
//! key is optional and falls back to the engine default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use triton_engine::{
    AnalysisMethod, Config, FmaxpcorrMethod, InputType, KpPolicy, OutputType, TailShape,
};

/// Top-level configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TritonConfig {
    /// Input/output paths. Both may be overridden on the command line.
    #[serde(default)]
    pub io: IoConfig,
    /// Analysis parameters.
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    /// CSV file holding the measured series, one value per line.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Where to write the JSON report; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// The `[analysis]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Sampling frequency in Hz.
    pub fs: f64,
    /// Number of bursts in the input file.
    pub n_burst: usize,
    /// Burst duration in seconds.
    pub burst_duration: usize,

    #[serde(default)]
    pub input_type: InputKind,
    #[serde(default)]
    pub output_type: OutputKind,
    #[serde(default)]
    pub method: MethodKind,
    #[serde(default)]
    pub separate_sea_swell: bool,

    #[serde(default = "default_nfft")]
    pub nfft: usize,
    #[serde(default = "default_fmin")]
    pub fmin: f64,
    #[serde(default = "default_fmax")]
    pub fmax: f64,
    #[serde(default = "default_true")]
    pub min_cutoff: bool,
    #[serde(default = "default_true")]
    pub max_cutoff: bool,

    #[serde(default)]
    pub tail: TailKind,
    #[serde(default = "default_ftail")]
    pub ftail: f64,
    #[serde(default = "default_tail_power")]
    pub tail_power: f64,

    #[serde(default = "default_fminpcorr")]
    pub fminpcorr: f64,
    #[serde(default = "default_fmaxpcorr")]
    pub fmaxpcorr: f64,
    #[serde(default)]
    pub fmaxpcorr_method: FmaxpcorrKind,
    #[serde(default)]
    pub kp_policy: KpKind,
    #[serde(default)]
    pub heightfrombed: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,

    #[serde(default = "default_fmin_swell")]
    pub fmin_swell: f64,
    #[serde(default = "default_fmax_swell")]
    pub fmax_swell: f64,
}

fn default_nfft() -> usize {
    512
}

fn default_fmin() -> f64 {
    0.05
}

fn default_fmax() -> f64 {
    1e6
}

fn default_true() -> bool {
    true
}

fn default_ftail() -> f64 {
    0.9
}

fn default_tail_power() -> f64 {
    -5.0
}

fn default_fminpcorr() -> f64 {
    0.15
}

fn default_fmaxpcorr() -> f64 {
    0.55
}

fn default_rho() -> f64 {
    1000.0
}

fn default_fmin_swell() -> f64 {
    0.1
}

fn default_fmax_swell() -> f64 {
    0.25
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Waterlevel,
    Pressure,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    #[default]
    Wave,
    Waterlevel,
    WaveAndWaterlevel,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Spectral,
    Zerocross,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailKind {
    #[default]
    Off,
    Jonswap,
    Tma,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FmaxpcorrKind {
    User,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpKind {
    One,
    #[default]
    Constant,
}

impl AnalysisConfig {
    /// Builds the engine configuration from this table.
    pub fn to_engine(&self) -> Config {
        Config::new(self.fs, self.n_burst, self.burst_duration)
            .with_input_type(match self.input_type {
                InputKind::Waterlevel => InputType::WaterLevel,
                InputKind::Pressure => InputType::Pressure,
            })
            .with_output_type(match self.output_type {
                OutputKind::Wave => OutputType::Wave,
                OutputKind::Waterlevel => OutputType::WaterLevel,
                OutputKind::WaveAndWaterlevel => OutputType::WaveAndWaterLevel,
            })
            .with_method(match self.method {
                MethodKind::Spectral => AnalysisMethod::Spectral,
                MethodKind::Zerocross => AnalysisMethod::Zerocross,
            })
            .with_separate_sea_swell(self.separate_sea_swell)
            .with_nfft(self.nfft)
            .with_fmin(self.fmin)
            .with_fmax(self.fmax)
            .with_min_cutoff(self.min_cutoff)
            .with_max_cutoff(self.max_cutoff)
            .with_tail(match self.tail {
                TailKind::Off => TailShape::Off,
                TailKind::Jonswap => TailShape::Jonswap,
                TailKind::Tma => TailShape::Tma,
            })
            .with_ftail(self.ftail)
            .with_tail_power(self.tail_power)
            .with_fminpcorr(self.fminpcorr)
            .with_fmaxpcorr(self.fmaxpcorr)
            .with_fmaxpcorr_method(match self.fmaxpcorr_method {
                FmaxpcorrKind::User => FmaxpcorrMethod::User,
                FmaxpcorrKind::Auto => FmaxpcorrMethod::Auto,
            })
            .with_kp_policy(match self.kp_policy {
                KpKind::One => KpPolicy::One,
                KpKind::Constant => KpPolicy::Constant,
            })
            .with_heightfrombed(self.heightfrombed)
            .with_rho(self.rho)
            .with_fmin_swell(self.fmin_swell)
            .with_fmax_swell(self.fmax_swell)
    }
}

/// Reads and parses the configuration file at `path`.
pub fn load(path: &Path) -> Result<TritonConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: TritonConfig = toml::from_str(
            r#"
            [analysis]
            fs = 2.0
            n_burst = 4
            burst_duration = 1024
            "#,
        )
        .unwrap();
        assert!(cfg.io.input.is_none());
        assert_eq!(cfg.analysis.nfft, 512);
        assert!((cfg.analysis.fmin - 0.05).abs() < f64::EPSILON);
        assert!(cfg.analysis.to_engine().validate().is_ok());
    }

    #[test]
    fn full_config_parses() {
        let cfg: TritonConfig = toml::from_str(
            r#"
            [io]
            input = "pressure.csv"
            output = "waves.json"

            [analysis]
            fs = 10.0
            n_burst = 6
            burst_duration = 1024
            input_type = "pressure"
            output_type = "wave_and_waterlevel"
            method = "spectral"
            separate_sea_swell = true
            nfft = 1024
            fmin = 0.04
            fmax = 1.0
            tail = "jonswap"
            ftail = 0.8
            fmaxpcorr_method = "user"
            fmaxpcorr = 0.6
            kp_policy = "one"
            heightfrombed = 0.05
            rho = 1024.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.input.as_deref(), Some(Path::new("pressure.csv")));
        let engine = cfg.analysis.to_engine();
        assert!(engine.validate().is_ok());
        assert_eq!(engine.nfft(), 1024);
        assert!(engine.separate_sea_swell());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<TritonConfig, _> = toml::from_str(
            r#"
            [analysis]
            fs = 2.0
            n_burst = 1
            burst_duration = 1024
            not_a_key = 5
            "#,
        );
        assert!(result.is_err());
    }
}
