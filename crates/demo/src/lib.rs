// File: crates/demo/src/lib.rs
// Summary: Shared demo plumbing: label/value CSV loading and the per-type chart set built from it.

pub mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{ChartConfig, ChartType, Theme};

/// Grid rows used when fitting a bar/line scale to loaded data.
const FITTED_ROWS: usize = 10;

/// Labelled values loaded from CSV.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
pub fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Load a `label,value` CSV with a header row. Columns are found by header name
/// (`label`/`name`/`category`, `value`/`y`/`count`), falling back to the first two columns.
/// Rows whose value does not parse as a finite number are skipped.
pub fn load_label_values(path: &Path) -> Result<Dataset> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_label_values(rdr)
}

/// Same as [`load_label_values`] over any reader.
pub fn read_label_values<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Dataset> {
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "category", "x"]).unwrap_or(0);
    let i_value = idx(&["value", "y", "count", "amount"]).unwrap_or(1);

    let mut out = Dataset::default();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        match value {
            Some(v) => {
                out.labels.push(rec.get(i_label).unwrap_or_default().to_string());
                out.values.push(v);
            }
            None => tracing::warn!(row = row + 1, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

/// One configuration per chart type, from `data` when given or the built-in samples,
/// restyled by `theme`.
pub fn build_configs(data: Option<&Dataset>, theme: &Theme) -> Vec<ChartConfig> {
    ChartType::ALL
        .iter()
        .map(|&t| {
            let mut cfg = ChartConfig::sample(t);
            if let Some(ds) = data {
                cfg.data = ds.values.clone();
                cfg = cfg.with_labels(ds.labels.clone()).with_fitted_scale(FITTED_ROWS);
            }
            theme.apply(&mut cfg);
            cfg
        })
        .collect()
}
