use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 20;

/// Render the first rows of the loaded table under a collapsible header.
pub fn data_preview(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };

    egui::CollapsingHeader::new("Data preview")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let rows = ds.row_count().min(PREVIEW_ROWS);

            egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .columns(Column::auto().at_least(60.0), ds.column_count())
                    .header(20.0, |mut header| {
                        for name in &ds.headers {
                            header.col(|ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, rows, |mut row| {
                            let idx = row.index();
                            for col in 0..ds.column_count() {
                                row.col(|ui| {
                                    ui.label(format_cell(ds.cell(idx, col)));
                                });
                            }
                        });
                    });
            });

            if ds.row_count() > rows {
                ui.weak(format!("… {} more rows", ds.row_count() - rows));
            }
        });
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_nan() => String::new(),
        Some(v) => format!("{v:.4}"),
        None => String::new(),
    }
}
