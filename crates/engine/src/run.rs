//! The burst-wise analysis run.

use tracing::{info, warn};
use triton_dispersion::GRAVITY;
use triton_pcorr::{fft_correction, zerocross_correction, AttenuationPolicy, PcorrConfig};
use triton_seaswell::{sea_swell_analysis, SeaSwellConfig};
use triton_spectral::{wave_spectrum, SpectralConfig};
use triton_zerocross::{detect_waves, wave_statistics};

use crate::config::{Config, FmaxpcorrMethod, InputType, KpPolicy};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::EngineError;
use crate::module::{select_module, AnalysisModule};
use crate::record::WaveRecord;

/// Smallest mean depth a burst is allowed, in m.
const MIN_DEPTH: f64 = 0.001;

/// Everything an analysis run produces.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Burst-aligned results.
    pub record: WaveRecord,
    /// Non-fatal findings collected along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the configured analysis over every burst of `data`.
///
/// The input length must equal `n_burst * burst_duration * fs`. Non-finite
/// samples are repaired by linear interpolation before the burst loop, and
/// pressure input is converted to head by dividing by `rho * g`. A burst
/// whose analysis fails contributes NaN outputs and a diagnostic instead of
/// aborting the run.
pub fn analyze(data: &[f64], config: &Config) -> Result<RunOutput, EngineError> {
    config.validate()?;
    let (module, cfg, mut diagnostics) = select_module(config);

    let per_burst = cfg.samples_per_burst();
    let expected = cfg.n_burst() * per_burst;
    if data.len() != expected {
        return Err(EngineError::SampleCountMismatch {
            expected,
            actual: data.len(),
            n_burst: cfg.n_burst(),
            per_burst,
        });
    }

    let mut d = data.to_vec();
    match triton_stats::fill_nonfinite(&mut d) {
        None => return Err(EngineError::NoFiniteSamples),
        Some(0) => {}
        Some(count) => {
            warn!(count, "non-finite samples repaired");
            diagnostics.push(Diagnostic::run(DiagnosticKind::NonFiniteRepaired { count }));
        }
    }

    let zeros = d.iter().filter(|&&v| v == 0.0).count();
    if zeros > 0 {
        diagnostics.push(Diagnostic::run(DiagnosticKind::ZeroValuesPresent {
            count: zeros,
        }));
    }

    if cfg.input_type() == InputType::Pressure {
        let scale = 1.0 / (cfg.rho() * GRAVITY);
        for v in d.iter_mut() {
            *v *= scale;
        }
    }

    let n_half = cfg.nfft() / 2 + 1;
    let mut record = new_record(module, cfg.n_burst());

    for i in 0..cfg.n_burst() {
        let burst = &d[i * per_burst..(i + 1) * per_burst];

        let mut h = triton_stats::mean(burst);
        if cfg.input_type() == InputType::Pressure {
            h += cfg.heightfrombed();
        }
        if h <= 0.0 {
            diagnostics.push(Diagnostic::burst(i, DiagnosticKind::DepthClamped { depth: h }));
            h = MIN_DEPTH;
        }

        match run_burst(module, burst, h, &cfg) {
            Ok(result) => push_burst(&mut record, result, n_half, per_burst),
            Err(message) => {
                warn!(burst = i, %message, "burst analysis failed");
                diagnostics.push(Diagnostic::burst(
                    i,
                    DiagnosticKind::BurstFailed { message },
                ));
                push_burst(&mut record, BurstResult::new(), n_half, per_burst);
            }
        }
        record.burst_data.push(burst.to_vec());
    }

    info!(
        module = module.id(),
        bursts = cfg.n_burst(),
        diagnostics = diagnostics.len(),
        "analysis complete"
    );
    Ok(RunOutput {
        record,
        diagnostics,
    })
}

/// Per-burst outputs; fields a module does not produce stay NaN or `None`.
struct BurstResult {
    hm0: f64,
    hm0_sea: f64,
    hm0_swell: f64,
    tp: f64,
    tp_sea: f64,
    tp_swell: f64,
    fp: f64,
    fseparation: f64,
    hs: f64,
    hz: f64,
    tz: f64,
    ts: f64,
    f_row: Option<Vec<f64>>,
    syy_row: Option<Vec<f64>>,
    eta_row: Option<Vec<f64>>,
}

impl BurstResult {
    fn new() -> Self {
        Self {
            hm0: f64::NAN,
            hm0_sea: f64::NAN,
            hm0_swell: f64::NAN,
            tp: f64::NAN,
            tp_sea: f64::NAN,
            tp_swell: f64::NAN,
            fp: f64::NAN,
            fseparation: f64::NAN,
            hs: f64::NAN,
            hz: f64::NAN,
            tz: f64::NAN,
            ts: f64::NAN,
            f_row: None,
            syy_row: None,
            eta_row: None,
        }
    }
}

fn run_burst(
    module: AnalysisModule,
    burst: &[f64],
    h: f64,
    cfg: &Config,
) -> Result<BurstResult, String> {
    let mut result = BurstResult::new();
    match module {
        AnalysisModule::SpectralWave => {
            let stats =
                wave_spectrum(burst, &spectral_config(cfg, h, cfg.ftail())).map_err(stringify)?;
            fill_spectral(&mut result, &stats);
        }
        AnalysisModule::ZerocrossWave => {
            let train = detect_waves(burst, cfg.fs()).map_err(stringify)?;
            fill_zerocross(&mut result, &train);
        }
        AnalysisModule::SpectralElevation => {
            let correction =
                fft_correction(burst, h, &pcorr_config(cfg)).map_err(stringify)?;
            result.eta_row = Some(correction.into_eta());
        }
        AnalysisModule::ZerocrossElevation => {
            let eta = zerocross_correction(burst, h, &pcorr_config(cfg)).map_err(stringify)?;
            result.eta_row = Some(eta);
        }
        AnalysisModule::SpectralSeaSwell => {
            let stats =
                sea_swell_analysis(burst, &seaswell_config(cfg, h, cfg.ftail()))
                    .map_err(stringify)?;
            fill_seaswell(&mut result, &stats);
        }
        AnalysisModule::SpectralWaveElevation => {
            let correction =
                fft_correction(burst, h, &pcorr_config(cfg)).map_err(stringify)?;
            let ftail = correction.ftail();
            let stats = wave_spectrum(correction.eta(), &spectral_config(cfg, h, ftail))
                .map_err(stringify)?;
            fill_spectral(&mut result, &stats);
            result.eta_row = Some(correction.into_eta());
        }
        AnalysisModule::ZerocrossWaveElevation => {
            let eta = zerocross_correction(burst, h, &pcorr_config(cfg)).map_err(stringify)?;
            let train = detect_waves(&eta, cfg.fs()).map_err(stringify)?;
            fill_zerocross(&mut result, &train);
            result.eta_row = Some(eta);
        }
        AnalysisModule::SpectralSeaSwellElevation => {
            let correction =
                fft_correction(burst, h, &pcorr_config(cfg)).map_err(stringify)?;
            let ftail = correction.ftail();
            let stats = sea_swell_analysis(correction.eta(), &seaswell_config(cfg, h, ftail))
                .map_err(stringify)?;
            fill_seaswell(&mut result, &stats);
            result.eta_row = Some(correction.into_eta());
        }
    }
    Ok(result)
}

fn fill_spectral(result: &mut BurstResult, stats: &triton_spectral::SpectralWaveStats) {
    result.hm0 = stats.hm0();
    result.tp = stats.tp();
    result.fp = stats.fp();
    result.f_row = Some(stats.spectrum().frequencies().to_vec());
    result.syy_row = Some(stats.spectrum().densities().to_vec());
}

fn fill_zerocross(result: &mut BurstResult, train: &triton_zerocross::WaveTrain) {
    let stats = wave_statistics(train);
    result.hs = stats.hs();
    result.hz = stats.hz();
    result.tz = stats.tz();
    result.ts = stats.ts();
}

fn fill_seaswell(result: &mut BurstResult, stats: &triton_seaswell::SeaSwellStats) {
    result.hm0 = stats.hm0();
    result.hm0_sea = stats.hm0_sea();
    result.hm0_swell = stats.hm0_swell();
    result.tp = stats.tp();
    result.tp_sea = stats.tp_sea();
    result.tp_swell = stats.tp_swell();
    result.fp = stats.fp();
    result.fseparation = stats.fseparation();
    result.f_row = Some(stats.spectrum().frequencies().to_vec());
    result.syy_row = Some(stats.spectrum().densities().to_vec());
}

fn spectral_config(cfg: &Config, h: f64, ftail: f64) -> SpectralConfig {
    SpectralConfig::new(cfg.fs())
        .with_nfft(cfg.nfft())
        .with_fmin(cfg.fmin())
        .with_fmax(cfg.fmax())
        .with_min_cutoff(cfg.min_cutoff())
        .with_max_cutoff(cfg.max_cutoff())
        .with_tail(cfg.tail())
        .with_ftail(ftail)
        .with_tail_power(cfg.tail_power())
        .with_depth(h)
}

fn seaswell_config(cfg: &Config, h: f64, ftail: f64) -> SeaSwellConfig {
    SeaSwellConfig::new(spectral_config(cfg, h, ftail))
        .with_fmax_swell(cfg.fmax_swell())
        .with_fmin_swell(cfg.fmin_swell())
}

fn pcorr_config(cfg: &Config) -> PcorrConfig {
    let policy = match cfg.kp_policy() {
        KpPolicy::One => AttenuationPolicy::BlendToUnity,
        KpPolicy::Constant => AttenuationPolicy::HoldConstant,
    };
    PcorrConfig::new(cfg.fs())
        .with_heightfrombed(cfg.heightfrombed())
        .with_fminpcorr(cfg.fminpcorr())
        .with_fmaxpcorr(cfg.fmaxpcorr())
        .with_ftail(cfg.ftail())
        .with_policy(policy)
        .with_auto_fmax(cfg.fmaxpcorr_method() == FmaxpcorrMethod::Auto)
}

fn stringify<E: std::fmt::Display>(err: E) -> String {
    err.to_string()
}

/// Initializes the record with the fields the module populates.
fn new_record(module: AnalysisModule, n_burst: usize) -> WaveRecord {
    let mut record = WaveRecord {
        module: module.id(),
        burst_data: Vec::with_capacity(n_burst),
        ..WaveRecord::default()
    };

    let scalar = || Some(Vec::with_capacity(n_burst));
    let rows = || Some(Vec::with_capacity(n_burst));

    if module.emits_elevation() {
        record.eta = rows();
    }
    match module {
        AnalysisModule::SpectralWave | AnalysisModule::SpectralWaveElevation => {
            record.hm0 = scalar();
            record.tp = scalar();
            record.fp = scalar();
        }
        AnalysisModule::ZerocrossWave | AnalysisModule::ZerocrossWaveElevation => {
            record.hs = scalar();
            record.hz = scalar();
            record.tz = scalar();
            record.ts = scalar();
        }
        AnalysisModule::SpectralSeaSwell | AnalysisModule::SpectralSeaSwellElevation => {
            record.hm0 = scalar();
            record.hm0_sea = scalar();
            record.hm0_swell = scalar();
            record.tp = scalar();
            record.tp_sea = scalar();
            record.tp_swell = scalar();
            record.fp = scalar();
            record.fseparation = scalar();
        }
        AnalysisModule::SpectralElevation | AnalysisModule::ZerocrossElevation => {}
    }
    if module.emits_spectrum() {
        record.f = rows();
        record.syy = rows();
    }

    record.field_names = field_names(module);
    record
}

fn field_names(module: AnalysisModule) -> Vec<String> {
    let names: &[&str] = match module {
        AnalysisModule::SpectralWave => &["Hm0", "Tp", "fp", "f", "Syy", "Burst_Data"],
        AnalysisModule::ZerocrossWave => &["Hs", "Hz", "Tz", "Ts", "Burst_Data"],
        AnalysisModule::SpectralElevation | AnalysisModule::ZerocrossElevation => {
            &["Eta", "Burst_Data"]
        }
        AnalysisModule::SpectralSeaSwell => &[
            "Hm0",
            "Hm0sea",
            "Hm0swell",
            "Tp",
            "Tpsea",
            "Tpswell",
            "fp",
            "fseparation",
            "f",
            "Syy",
            "Burst_Data",
        ],
        AnalysisModule::SpectralWaveElevation => {
            &["Eta", "Hm0", "Tp", "fp", "f", "Syy", "Burst_Data"]
        }
        AnalysisModule::ZerocrossWaveElevation => {
            &["Eta", "Hs", "Hz", "Tz", "Ts", "Burst_Data"]
        }
        AnalysisModule::SpectralSeaSwellElevation => &[
            "Eta",
            "Hm0",
            "Hm0sea",
            "Hm0swell",
            "Tp",
            "Tpsea",
            "Tpswell",
            "fp",
            "fseparation",
            "f",
            "Syy",
            "Burst_Data",
        ],
    };
    names.iter().map(|s| s.to_string()).collect()
}

fn push_burst(record: &mut WaveRecord, result: BurstResult, n_half: usize, per_burst: usize) {
    if let Some(v) = &mut record.hm0 {
        v.push(result.hm0);
    }
    if let Some(v) = &mut record.hm0_sea {
        v.push(result.hm0_sea);
    }
    if let Some(v) = &mut record.hm0_swell {
        v.push(result.hm0_swell);
    }
    if let Some(v) = &mut record.tp {
        v.push(result.tp);
    }
    if let Some(v) = &mut record.tp_sea {
        v.push(result.tp_sea);
    }
    if let Some(v) = &mut record.tp_swell {
        v.push(result.tp_swell);
    }
    if let Some(v) = &mut record.fp {
        v.push(result.fp);
    }
    if let Some(v) = &mut record.fseparation {
        v.push(result.fseparation);
    }
    if let Some(v) = &mut record.hs {
        v.push(result.hs);
    }
    if let Some(v) = &mut record.hz {
        v.push(result.hz);
    }
    if let Some(v) = &mut record.tz {
        v.push(result.tz);
    }
    if let Some(v) = &mut record.ts {
        v.push(result.ts);
    }
    if let Some(v) = &mut record.f {
        v.push(
            result
                .f_row
                .unwrap_or_else(|| vec![f64::NAN; n_half]),
        );
    }
    if let Some(v) = &mut record.syy {
        v.push(
            result
                .syy_row
                .unwrap_or_else(|| vec![f64::NAN; n_half]),
        );
    }
    if let Some(v) = &mut record.eta {
        v.push(
            result
                .eta_row
                .unwrap_or_else(|| vec![f64::NAN; per_burst]),
        );
    }
}
