use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::to_color32;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left series panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    let chart = match &state.chart {
        Some(chart) => chart,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Collect what we need so we can mutate state inside the loop.
    let entries: Vec<(String, Color32)> = chart
        .series
        .iter()
        .map(|s| (s.name.clone(), to_color32(s.color)))
        .collect();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.hide_all();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (name, color) in &entries {
                let mut checked = state.is_visible(name);
                let text = RichText::new(name).color(*color);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_series(name);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(chart)) = (&state.dataset, &state.chart) {
            ui.label(format!(
                "{}: {} rows, {} series",
                ds.source_display(),
                ds.row_count(),
                chart.series_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "tsv", "tab", "txt"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
