//! The `analyze` subcommand: CSV in, JSON report out.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use triton_engine::{analyze, Diagnostic, WaveRecord};

use crate::cli::AnalyzeArgs;
use crate::config;

/// JSON document written for one run.
#[derive(Serialize)]
struct Report {
    record: WaveRecord,
    diagnostics: Vec<Diagnostic>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;

    let input = args
        .input
        .or(cfg.io.input)
        .context("no input file: set [io].input in the config or pass --input")?;
    let output = args.output.or(cfg.io.output);

    let data = read_series(&input)?;
    info!(
        samples = data.len(),
        input = %input.display(),
        "loaded measurement series"
    );

    let engine_cfg = cfg.analysis.to_engine();
    let run = analyze(&data, &engine_cfg)
        .with_context(|| format!("analyzing {}", input.display()))?;

    for diagnostic in &run.diagnostics {
        warn!("{diagnostic}");
    }
    info!(
        module = run.record.module,
        bursts = engine_cfg.n_burst(),
        "analysis complete"
    );

    let report = Report {
        record: run.record,
        diagnostics: run.diagnostics,
    };
    let json = serde_json::to_string_pretty(&report).context("serializing report")?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            file.write_all(json.as_bytes())
                .and_then(|()| file.write_all(b"\n"))
                .with_context(|| format!("writing output file {}", path.display()))?;
            info!(output = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Reads a single-column CSV of sample values.
///
/// Blank lines are skipped; `NaN` parses as a missing sample and is repaired
/// downstream by the engine.
fn read_series(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening input file {}", path.display()))?;

    let mut data = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading {}", path.display()))?;
        let field = match record.get(0) {
            Some(f) if !f.is_empty() => f,
            _ => continue,
        };
        let value: f64 = field.parse().with_context(|| {
            format!("{}:{}: not a number: {field:?}", path.display(), line + 1)
        })?;
        data.push(value);
    }

    if data.is_empty() {
        bail!("input file {} holds no samples", path.display());
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_single_column_values() {
        let path = write_temp("triton_read_series.csv", "1.5\n2.25\n\n-3.0\n");
        let data = read_series(&path).unwrap();
        assert_eq!(data, vec![1.5, 2.25, -3.0]);
    }

    #[test]
    fn nan_values_parse_as_nan() {
        let path = write_temp("triton_read_series_nan.csv", "1.0\nNaN\n2.0\n");
        let data = read_series(&path).unwrap();
        assert_eq!(data.len(), 3);
        assert!(data[1].is_nan());
    }

    #[test]
    fn garbage_is_an_error() {
        let path = write_temp("triton_read_series_bad.csv", "1.0\nhello\n");
        assert!(read_series(&path).is_err());
    }

    #[test]
    fn empty_file_is_an_error() {
        let path = write_temp("triton_read_series_empty.csv", "");
        assert!(read_series(&path).is_err());
    }
}
