use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::to_color32;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart title and the line plot in the central panel.
pub fn chart_plot(ui: &mut Ui, state: &AppState) {
    let chart = match &state.chart {
        Some(chart) => chart,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No data loaded  (File → Reload or File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let mut plot = Plot::new("chart_plot")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in state.visible_series() {
            let color = to_color32(series.color);

            // Only the first run gets a legend entry.
            for (idx, segment) in series.segments.iter().enumerate() {
                let mut line = Line::new(PlotPoints::from(segment.clone()))
                    .color(color)
                    .width(1.5);
                if idx == 0 {
                    line = line.name(&series.name);
                }
                plot_ui.line(line);
            }
        }
    });
}
