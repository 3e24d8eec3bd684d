use serde::Serialize;

use crate::color::generate_palette;
use crate::data::model::Dataset;

/// Label of the shared Y axis.
pub const Y_LABEL: &str = "Values";

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

/// One line: a dependent column drawn against the first column.
///
/// Rows with a missing X or Y value split the line, so `segments` holds the
/// contiguous runs of finite points in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub segments: Vec<Vec<[f64; 2]>>,
    pub color: [u8; 3],
}

impl Series {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Everything the plot window draws, independent of egui.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: bool,
    pub grid: bool,
}

impl Chart {
    /// Build the chart for `dataset`.  `filename` is the data path as it was
    /// named by the sentinel file and only appears in the title.
    pub fn from_dataset(dataset: &Dataset, filename: &str) -> Self {
        let colors = generate_palette(dataset.column_count().saturating_sub(1));
        let x = dataset.x();

        let series: Vec<Series> = dataset
            .series_columns()
            .zip(colors)
            .map(|((name, values), color)| {
                let series = Series {
                    name: name.to_string(),
                    segments: finite_runs(x, values),
                    color,
                };

                let skipped = values.len() - series.point_count();
                if skipped > 0 {
                    log::warn!("{name}: {skipped} rows with missing values left as gaps");
                }
                series
            })
            .collect();

        if series.is_empty() {
            log::warn!("{filename} has only one column; nothing to plot against it");
        }

        Chart {
            title: format!("Dynamic Plot from {filename}"),
            x_label: dataset.x_name().to_string(),
            y_label: Y_LABEL.to_string(),
            series,
            legend: true,
            grid: true,
        }
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }
}

/// Split `(x, y)` pairs into runs of finite points; a non-finite value in
/// either column ends the current run.
fn finite_runs(x: &[f64], y: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (&xi, &yi) in x.iter().zip(y) {
        if xi.is_finite() && yi.is_finite() {
            current.push([xi, yi]);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn dataset(text: &str) -> Dataset {
        load_reader(text.as_bytes(), b',', Path::new("SIR_simulation_results.csv")).unwrap()
    }

    const SIR: &str = "Time,Susceptible,Infectious,Recovered\n\
                       0.0,0.99,0.01,0.0\n\
                       0.01,0.98,0.015,0.005\n\
                       0.02,0.97,0.02,0.01\n";

    #[test]
    fn one_series_per_dependent_column() {
        let ds = dataset(SIR);
        let chart = Chart::from_dataset(&ds, "SIR_simulation_results.csv");

        assert_eq!(chart.series_count(), ds.column_count() - 1);
        assert_eq!(
            chart.series_names().collect::<Vec<_>>(),
            vec!["Susceptible", "Infectious", "Recovered"]
        );
    }

    #[test]
    fn series_share_first_column_as_x() {
        let ds = dataset(SIR);
        let chart = Chart::from_dataset(&ds, "SIR_simulation_results.csv");

        for series in &chart.series {
            assert_eq!(series.segments.len(), 1);
            let xs: Vec<f64> = series.segments.iter().flatten().map(|p| p[0]).collect();
            assert_eq!(xs, ds.x());
            assert_eq!(
                series.segments.iter().flatten().map(|p| p[1]).collect::<Vec<_>>(),
                ds.column(&series.name).unwrap()
            );
        }
    }

    #[test]
    fn labels_and_decorations() {
        let chart = Chart::from_dataset(&dataset(SIR), "out/SIR.csv");

        assert_eq!(chart.title, "Dynamic Plot from out/SIR.csv");
        assert_eq!(chart.x_label, "Time");
        assert_eq!(chart.y_label, "Values");
        assert!(chart.legend);
        assert!(chart.grid);
    }

    #[test]
    fn series_get_distinct_colours() {
        let chart = Chart::from_dataset(&dataset(SIR), "SIR.csv");
        assert_ne!(chart.series[0].color, chart.series[1].color);
        assert_ne!(chart.series[1].color, chart.series[2].color);
    }

    #[test]
    fn missing_value_breaks_the_line() {
        let ds = dataset("t,y\n0,1\n1,\n2,3\n");
        let chart = Chart::from_dataset(&ds, "gap.csv");

        assert_eq!(
            chart.series[0].segments,
            vec![vec![[0.0, 1.0]], vec![[2.0, 3.0]]]
        );
        assert_eq!(chart.series[0].point_count(), 2);
    }

    #[test]
    fn missing_x_breaks_every_series() {
        let ds = dataset("t,a,b\n0,1,\n1,2,5\n,3,6\n4,4,7\n");
        let chart = Chart::from_dataset(&ds, "gaps.csv");

        assert_eq!(
            chart.series[0].segments,
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[4.0, 4.0]]]
        );
        assert_eq!(
            chart.series[1].segments,
            vec![vec![[1.0, 5.0]], vec![[4.0, 7.0]]]
        );
    }

    #[test]
    fn leading_and_trailing_gaps_leave_no_empty_runs() {
        let ds = dataset("t,y\n0,\n1,2\n2,3\n3,\n");
        let chart = Chart::from_dataset(&ds, "edges.csv");

        assert_eq!(chart.series[0].segments, vec![vec![[1.0, 2.0], [2.0, 3.0]]]);
    }

    #[test]
    fn header_only_series_have_no_segments() {
        let chart = Chart::from_dataset(&dataset("t,y\n"), "empty.csv");
        assert!(chart.series[0].segments.is_empty());
    }

    #[test]
    fn single_column_has_no_series() {
        let chart = Chart::from_dataset(&dataset("Time\n0\n1\n"), "time_only.csv");
        assert_eq!(chart.series_count(), 0);
        assert_eq!(chart.x_label, "Time");
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = Chart::from_dataset(&dataset(SIR), "SIR.csv");
        let second = Chart::from_dataset(&dataset(SIR), "SIR.csv");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
