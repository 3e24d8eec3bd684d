use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::Chart;
use crate::data::loader;
use crate::data::model::Dataset;
use crate::sentinel;

/// A loaded table together with the chart built from it.
#[derive(Debug, Clone)]
pub struct Plotted {
    pub dataset: Dataset,
    pub chart: Chart,
}

/// Sentinel file → data file → chart.
///
/// A missing sentinel fails before any data file is touched.
pub fn from_sentinel(sentinel_path: &Path) -> Result<Plotted> {
    let data_path = sentinel::resolve_data_path(sentinel_path)?;
    from_data_file(&data_path)
}

/// Load `data_path` directly and build its chart.
pub fn from_data_file(data_path: &Path) -> Result<Plotted> {
    log::info!("Loading data from {}...", data_path.display());
    let dataset = loader::load_file(data_path)
        .with_context(|| format!("loading {}", data_path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has a header but no data rows", data_path.display());
    }
    let chart = Chart::from_dataset(&dataset, &dataset.source_display());
    Ok(Plotted { dataset, chart })
}
