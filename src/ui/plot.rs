use std::ops::RangeInclusive;

use eframe::egui::{ScrollArea, Ui};
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

use crate::config::PlotConfig;
use crate::state::{PlottedSpectrum, ViewerState};

/// Relative padding added around auto-scaled Y data.
const Y_MARGIN: f64 = 0.05;
const MIN_PLOT_HEIGHT: f32 = 250.0;

// ---------------------------------------------------------------------------
// Axis geometry
// ---------------------------------------------------------------------------

// egui_plot axes always grow to the right, so a descending wavenumber axis
// is drawn by negating x and printing the tick labels negated again.

/// Map a data x value into plot space.
pub fn to_plot_x(x: f64, descending: bool) -> f64 {
    if descending {
        -x
    } else {
        x
    }
}

/// Tick label for a grid mark, with as many decimals as the grid step needs.
pub fn tick_label(value: f64, step_size: f64, descending: bool) -> String {
    let decimals = if step_size > 0.0 && step_size.is_finite() {
        (-step_size.log10() - 1e-9).ceil().clamp(0.0, 12.0) as usize
    } else {
        0
    };
    // `+ 0.0` turns -0.0 into 0.0
    format!("{:.decimals$}", to_plot_x(value, descending) + 0.0)
}

/// Initial view rectangle `(min, max)` in plot space for one spectrum.
pub fn view_bounds(config: &PlotConfig, y: &[f64]) -> ([f64; 2], [f64; 2]) {
    let descending = config.x_descending();
    let (a, b) = config.x_limits;
    let (xa, xb) = (to_plot_x(a, descending), to_plot_x(b, descending));

    let (y_min, y_max) = match config.y_limits {
        Some((lo, hi)) => (lo.min(hi), lo.max(hi)),
        None => auto_y_range(y),
    };
    ([xa.min(xb), y_min], [xa.max(xb), y_max])
}

fn auto_y_range(y: &[f64]) -> (f64, f64) {
    let finite = y.iter().copied().filter(|v| v.is_finite());
    let lo = finite.clone().reduce(f64::min);
    let hi = finite.reduce(f64::max);
    match (lo, hi) {
        (Some(lo), Some(hi)) => {
            let span = hi - lo;
            let pad = if span > 0.0 { span * Y_MARGIN } else { Y_MARGIN };
            (lo - pad, hi + pad)
        }
        _ => (0.0, 1.0),
    }
}

// ---------------------------------------------------------------------------
// Spectral plots (central panel)
// ---------------------------------------------------------------------------

/// Render one plot per visible spectrum, stacked vertically.
pub fn spectral_plots(ui: &mut Ui, state: &mut ViewerState) {
    if state.spectra.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No spectra were processed.");
        });
        return;
    }

    let visible = state.visible_count().max(1);
    let height = (ui.available_height() / visible as f32 - 40.0).max(MIN_PLOT_HEIGHT);
    let config = state.plot;
    let reset = state.reset_view;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, sp) in state.spectra.iter().enumerate().filter(|(_, s)| s.visible) {
                ui.heading(sp.name.as_str());
                spectrum_plot(ui, idx, sp, &config, reset, height);
                ui.add_space(8.0);
            }
        });

    state.reset_view = false;
}

fn spectrum_plot(
    ui: &mut Ui,
    idx: usize,
    sp: &PlottedSpectrum,
    config: &PlotConfig,
    reset: bool,
    height: f32,
) {
    let descending = config.x_descending();
    let (min, max) = view_bounds(config, &sp.y);

    let points: PlotPoints = sp
        .x
        .iter()
        .zip(&sp.y)
        .map(|(&xi, &yi)| [to_plot_x(xi, descending), yi])
        .collect();

    Plot::new(("spectrum", idx))
        .height(height)
        .x_axis_label("Wavenumber [cm⁻¹]")
        .y_axis_label("Transmission [a.u.]")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            tick_label(mark.value, mark.step_size, descending)
        })
        .label_formatter(move |name: &str, value: &PlotPoint| {
            let x = to_plot_x(value.x, descending);
            if name.is_empty() {
                format!("{x:.1}\n{:.4}", value.y)
            } else {
                format!("{name}\n{x:.1}\n{:.4}", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }
            let line = Line::new(points)
                .name(&sp.name)
                .color(sp.color)
                .width(1.5);
            plot_ui.line(line);
        });
}
