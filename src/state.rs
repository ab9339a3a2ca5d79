use eframe::egui::Color32;

use crate::batch::ProcessedSpectrum;
use crate::color::generate_palette;
use crate::config::PlotConfig;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// One spectrum as shown in the viewer.
pub struct PlottedSpectrum {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Color32,
    pub visible: bool,
}

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    pub spectra: Vec<PlottedSpectrum>,

    /// Axis bounds requested on the command line.
    pub plot: PlotConfig,

    /// Set when the plots should snap back to the configured bounds on the
    /// next frame.
    pub reset_view: bool,
}

impl ViewerState {
    pub fn new(processed: Vec<ProcessedSpectrum>, plot: PlotConfig) -> Self {
        let colors = generate_palette(processed.len());
        let spectra = processed
            .into_iter()
            .zip(colors)
            .map(|(p, color)| {
                log::info!("Plotted spectra for {}.", p.name);
                PlottedSpectrum {
                    name: p.name,
                    x: p.spectrum.x,
                    y: p.spectrum.y,
                    color,
                    visible: true,
                }
            })
            .collect();
        Self {
            spectra,
            plot,
            reset_view: true,
        }
    }

    /// Number of spectra currently shown.
    pub fn visible_count(&self) -> usize {
        self.spectra.iter().filter(|s| s.visible).count()
    }

    pub fn show_all(&mut self, visible: bool) {
        for sp in &mut self.spectra {
            sp.visible = visible;
        }
    }
}
