use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – spectrum list
// ---------------------------------------------------------------------------

/// Render the list of loaded spectra with visibility toggles.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Spectra");
    ui.separator();

    if state.spectra.is_empty() {
        ui.label("Nothing loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all(true);
        }
        if ui.small_button("None").clicked() {
            state.show_all(false);
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for sp in &mut state.spectra {
                let text = RichText::new(&sp.name).color(sp.color);
                ui.checkbox(&mut sp.visible, text);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset view").clicked() {
                state.reset_view = true;
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} spectra, {} visible",
            state.spectra.len(),
            state.visible_count()
        ));

        ui.separator();

        let (x0, x1) = state.plot.x_limits;
        let y = match state.plot.y_limits {
            Some((y0, y1)) => format!("{y0} to {y1}"),
            None => "auto".to_string(),
        };
        ui.label(format!("x: {x0} to {x1}   y: {y}"));
    });
}
