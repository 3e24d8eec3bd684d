use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::chart::{Chart, Series};
use crate::data::model::Dataset;
use crate::pipeline::{self, Plotted};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Sentinel file consulted on reload.
    pub sentinel: PathBuf,

    /// Loaded table (None only if the very first load failed).
    pub dataset: Option<Dataset>,

    /// Chart derived from `dataset`.
    pub chart: Option<Chart>,

    /// Names of series the user has switched off.
    pub hidden: BTreeSet<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(sentinel: PathBuf, plotted: Option<Plotted>) -> Self {
        let mut state = AppState {
            sentinel,
            dataset: None,
            chart: None,
            hidden: BTreeSet::new(),
            status_message: None,
        };
        if let Some(plotted) = plotted {
            state.set_plotted(plotted);
        }
        state
    }

    /// Replace the displayed data.  Series hidden before stay hidden if they
    /// still exist.
    pub fn set_plotted(&mut self, plotted: Plotted) {
        let Plotted { dataset, chart } = plotted;
        self.hidden
            .retain(|name| chart.series_names().any(|n| n == name.as_str()));
        self.dataset = Some(dataset);
        self.chart = Some(chart);
        self.status_message = None;
    }

    /// Re-read the sentinel file and the data it names.
    pub fn reload(&mut self) {
        let result = pipeline::from_sentinel(&self.sentinel);
        self.apply(result);
    }

    /// Plot a file picked by the user, bypassing the sentinel.
    pub fn open(&mut self, path: &Path) {
        let result = pipeline::from_data_file(path);
        self.apply(result);
    }

    fn apply(&mut self, result: anyhow::Result<Plotted>) {
        match result {
            Ok(plotted) => self.set_plotted(plotted),
            Err(e) => {
                log::error!("Failed to load data: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn is_visible(&self, series: &str) -> bool {
        !self.hidden.contains(series)
    }

    /// Toggle a single series on or off.
    pub fn toggle_series(&mut self, series: &str) {
        if !self.hidden.remove(series) {
            self.hidden.insert(series.to_string());
        }
    }

    /// Show every series.
    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    /// Hide every series.
    pub fn hide_all(&mut self) {
        if let Some(chart) = &self.chart {
            self.hidden = chart.series_names().map(str::to_string).collect();
        }
    }

    /// Series that should be drawn, in file order.
    pub fn visible_series(&self) -> impl Iterator<Item = &Series> {
        self.chart
            .iter()
            .flat_map(|c| c.series.iter())
            .filter(|s| self.is_visible(&s.name))
    }
}
