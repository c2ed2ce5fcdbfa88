//! Per-run output record with one entry per burst.

use serde::Serialize;

/// Results of one analysis run, with burst-aligned vectors.
///
/// Which fields are present depends on the analysis module; absent fields
/// are skipped during serialization. A burst that failed holds NaN in every
/// scalar field and NaN rows in the series fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WaveRecord {
    /// Numeric identifier of the module that produced this record.
    pub module: u8,
    /// Names of the populated fields, in output order.
    pub field_names: Vec<String>,

    /// Zero-moment wave height per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hm0: Option<Vec<f64>>,
    /// Sea-partition zero-moment wave height per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hm0_sea: Option<Vec<f64>>,
    /// Swell-partition zero-moment wave height per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hm0_swell: Option<Vec<f64>>,
    /// Peak period per burst, in s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp: Option<Vec<f64>>,
    /// Sea-partition peak period per burst, in s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_sea: Option<Vec<f64>>,
    /// Swell-partition peak period per burst, in s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_swell: Option<Vec<f64>>,
    /// Weighted peak frequency per burst, in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp: Option<Vec<f64>>,
    /// Sea/swell separation frequency per burst, in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fseparation: Option<Vec<f64>>,

    /// Significant wave height per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs: Option<Vec<f64>>,
    /// Mean wave height per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hz: Option<Vec<f64>>,
    /// Mean wave period per burst, in s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<Vec<f64>>,
    /// Significant wave period per burst, in s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Vec<f64>>,

    /// Spectrum frequency grid per burst, in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<Vec<Vec<f64>>>,
    /// Spectral densities per burst, in m^2/Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syy: Option<Vec<Vec<f64>>>,
    /// Corrected surface elevation per burst, in m.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<Vec<Vec<f64>>>,

    /// The analyzed input, one row per burst (pressure input already
    /// converted to head).
    pub burst_data: Vec<Vec<f64>>,
}
