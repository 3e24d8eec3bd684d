mod app;
mod chart;
mod color;
mod data;
mod pipeline;
mod sentinel;
mod state;
mod ui;

#[cfg(test)]
mod testutil;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::ModelPlotApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

#[derive(Parser)]
#[command(name = "model-plot")]
#[command(about = "Plot the simulation results named by a sentinel file", long_about = None)]
struct Cli {
    /// File holding the path of the CSV to plot.
    #[arg(long, default_value = sentinel::DEFAULT_SENTINEL)]
    sentinel: PathBuf,

    /// Print the chart as JSON instead of opening a window.
    #[arg(long)]
    dump_chart: bool,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = 1000.0)]
    width: f32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let plotted = pipeline::from_sentinel(&cli.sentinel)?;

    if cli.dump_chart {
        println!("{}", dump(&plotted.chart)?);
        return Ok(());
    }

    let title = plotted.chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let state = AppState::new(cli.sentinel, Some(plotted));
    let window_title = title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ModelPlotApp::new(state, window_title)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}

/// Pretty JSON form of `chart`, as printed by `--dump-chart`.
fn dump(chart: &chart::Chart) -> Result<String> {
    serde_json::to_string_pretty(chart).context("serialising chart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn gap_chart() -> chart::Chart {
        let ds = load_reader("t,y\n0,1\n1,\n2,3\n".as_bytes(), b',', Path::new("gap.csv")).unwrap();
        chart::Chart::from_dataset(&ds, "gap.csv")
    }

    #[test]
    fn dump_is_pretty_json_in_field_order() {
        let json = dump(&gap_chart()).unwrap();

        assert!(json.starts_with("{\n  \"title\": \"Dynamic Plot from gap.csv\",\n"));
        let positions: Vec<usize> = ["title", "x_label", "y_label", "series", "legend", "grid"]
            .iter()
            .map(|k| json.find(&format!("\"{k}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dump_keeps_gaps_and_colours() {
        let value: serde_json::Value = serde_json::from_str(&dump(&gap_chart()).unwrap()).unwrap();

        assert_eq!(value["x_label"], "t");
        assert_eq!(value["y_label"], "Values");
        assert_eq!(value["legend"], true);
        assert_eq!(value["grid"], true);

        let series = &value["series"][0];
        assert_eq!(series["name"], "y");
        assert_eq!(series["segments"], serde_json::json!([[[0.0, 1.0]], [[2.0, 3.0]]]));
        assert_eq!(series["color"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn dump_is_stable_across_runs() {
        assert_eq!(dump(&gap_chart()).unwrap(), dump(&gap_chart()).unwrap());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["model-plot"]);
        assert_eq!(cli.sentinel, PathBuf::from("selected_model_filename.txt"));
        assert!(!cli.dump_chart);
        assert_eq!((cli.width, cli.height), (1000.0, 600.0));
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::parse_from([
            "model-plot",
            "--sentinel",
            "out/sentinel.txt",
            "--dump-chart",
            "--width",
            "800",
        ]);
        assert_eq!(cli.sentinel, PathBuf::from("out/sentinel.txt"));
        assert!(cli.dump_chart);
        assert_eq!(cli.width, 800.0);
    }
}
