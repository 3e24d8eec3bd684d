use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ModelPlotApp {
    pub state: AppState,
    /// Title last sent to the OS window.
    window_title: String,
}

impl ModelPlotApp {
    /// `window_title` is the title the window was opened with.
    pub fn new(state: AppState, window_title: String) -> Self {
        Self {
            state,
            window_title,
        }
    }

    /// The new window title, if the displayed chart changed since the last
    /// call.
    fn title_change(&mut self) -> Option<String> {
        let title = &self.state.chart.as_ref()?.title;
        if self.window_title == *title {
            return None;
        }
        self.window_title = title.clone();
        Some(title.clone())
    }
}

impl eframe::App for ModelPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(title) = self.title_change() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: series toggles ----
        egui::SidePanel::left("series_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: data preview ----
        egui::TopBottomPanel::bottom("preview_panel")
            .resizable(true)
            .show(ctx, |ui| {
                table::data_preview(ui, &self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.state);
        });
    }
}
