//! Analysis module selection.
//!
//! The four configuration axes (input type, output type, method, sea/swell
//! separation) combine into eight analysis modules. Incompatible
//! combinations are normalized first, so every configuration maps to exactly
//! one module.

use tracing::info;

use crate::config::{AnalysisMethod, Config, InputType, OutputType};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// One of the eight analysis pipelines the engine can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisModule {
    /// Water level in, spectral wave parameters out.
    SpectralWave,
    /// Water level in, zero-crossing wave parameters out.
    ZerocrossWave,
    /// Pressure in, corrected water level out (frequency-domain correction).
    SpectralElevation,
    /// Pressure in, corrected water level out (wave-by-wave correction).
    ZerocrossElevation,
    /// Water level in, sea/swell-partitioned wave parameters out.
    SpectralSeaSwell,
    /// Pressure in, corrected water level and spectral parameters out.
    SpectralWaveElevation,
    /// Pressure in, corrected water level and zero-crossing parameters out.
    ZerocrossWaveElevation,
    /// Pressure in, corrected water level and sea/swell parameters out.
    SpectralSeaSwellElevation,
}

impl AnalysisModule {
    /// Stable numeric identifier of the module.
    pub fn id(&self) -> u8 {
        match self {
            Self::SpectralWave => 1,
            Self::ZerocrossWave => 2,
            Self::SpectralElevation => 3,
            Self::ZerocrossElevation => 4,
            Self::SpectralSeaSwell => 5,
            Self::SpectralWaveElevation => 6,
            Self::ZerocrossWaveElevation => 7,
            Self::SpectralSeaSwellElevation => 8,
        }
    }

    /// Whether this module emits a corrected water level series.
    pub fn emits_elevation(&self) -> bool {
        matches!(
            self,
            Self::SpectralElevation
                | Self::ZerocrossElevation
                | Self::SpectralWaveElevation
                | Self::ZerocrossWaveElevation
                | Self::SpectralSeaSwellElevation
        )
    }

    /// Whether this module emits a spectrum.
    pub fn emits_spectrum(&self) -> bool {
        matches!(
            self,
            Self::SpectralWave
                | Self::SpectralSeaSwell
                | Self::SpectralWaveElevation
                | Self::SpectralSeaSwellElevation
        )
    }
}

/// Normalizes a configuration and selects its analysis module.
///
/// Returns the module, the normalized configuration, and a diagnostic for
/// every adjustment made.
pub fn select_module(config: &Config) -> (AnalysisModule, Config, Vec<Diagnostic>) {
    let mut cfg = config.clone();
    let mut diagnostics = Vec::new();

    // Water level input can only produce wave parameters.
    if cfg.input_type() == InputType::WaterLevel && cfg.output_type() != OutputType::Wave {
        cfg.set_output_type(OutputType::Wave);
        diagnostics.push(Diagnostic::run(DiagnosticKind::OutputTypeAdjusted {
            to: "wave".to_string(),
        }));
    }

    // Pressure input always yields the corrected water level too.
    if cfg.input_type() == InputType::Pressure && cfg.output_type() == OutputType::Wave {
        cfg.set_output_type(OutputType::WaveAndWaterLevel);
        diagnostics.push(Diagnostic::run(DiagnosticKind::OutputTypeAdjusted {
            to: "wave+waterlevel".to_string(),
        }));
    }

    // Sea/swell separation is spectral-only.
    if cfg.separate_sea_swell() && cfg.method() == AnalysisMethod::Zerocross {
        cfg.set_method(AnalysisMethod::Spectral);
        diagnostics.push(Diagnostic::run(DiagnosticKind::MethodAdjusted {
            to: "spectral".to_string(),
        }));
    }

    // A water-level-only run has no wave parameters to partition.
    if cfg.separate_sea_swell() && cfg.output_type() == OutputType::WaterLevel {
        cfg.set_separate_sea_swell(false);
        diagnostics.push(Diagnostic::run(DiagnosticKind::SeparationDisabled));
    }

    let module = match (
        cfg.input_type(),
        cfg.output_type(),
        cfg.method(),
        cfg.separate_sea_swell(),
    ) {
        (InputType::WaterLevel, _, AnalysisMethod::Spectral, false) => {
            AnalysisModule::SpectralWave
        }
        (InputType::WaterLevel, _, AnalysisMethod::Zerocross, false) => {
            AnalysisModule::ZerocrossWave
        }
        (InputType::WaterLevel, _, AnalysisMethod::Spectral, true) => {
            AnalysisModule::SpectralSeaSwell
        }
        (InputType::Pressure, OutputType::WaterLevel, AnalysisMethod::Spectral, _) => {
            AnalysisModule::SpectralElevation
        }
        (InputType::Pressure, OutputType::WaterLevel, AnalysisMethod::Zerocross, _) => {
            AnalysisModule::ZerocrossElevation
        }
        (InputType::Pressure, _, AnalysisMethod::Spectral, false) => {
            AnalysisModule::SpectralWaveElevation
        }
        (InputType::Pressure, _, AnalysisMethod::Zerocross, false) => {
            AnalysisModule::ZerocrossWaveElevation
        }
        (InputType::Pressure, _, AnalysisMethod::Spectral, true) => {
            AnalysisModule::SpectralSeaSwellElevation
        }
        // Normalization already forced spectral for any separation run.
        (InputType::WaterLevel, _, AnalysisMethod::Zerocross, true) => {
            AnalysisModule::SpectralSeaSwell
        }
        (InputType::Pressure, _, AnalysisMethod::Zerocross, true) => {
            AnalysisModule::SpectralSeaSwellElevation
        }
    };

    info!(module = module.id(), "analysis module selected");
    (module, cfg, diagnostics)
}
