use eframe::egui;

use crate::batch::ProcessedSpectrum;
use crate::config::PlotConfig;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpectrumViewerApp {
    pub state: ViewerState,
}

impl SpectrumViewerApp {
    pub fn new(processed: Vec<ProcessedSpectrum>, plot_config: PlotConfig) -> Self {
        Self {
            state: ViewerState::new(processed, plot_config),
        }
    }
}

impl eframe::App for SpectrumViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: spectrum list ----
        egui::SidePanel::left("spectrum_list")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectral_plots(ui, &mut self.state);
        });
    }
}

/// Open the viewer window and block until it is closed.
pub fn run_viewer(processed: Vec<ProcessedSpectrum>, plot_config: PlotConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "IR Spectra",
        options,
        Box::new(move |_cc| Ok(Box::new(SpectrumViewerApp::new(processed, plot_config)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
