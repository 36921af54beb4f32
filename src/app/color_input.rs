use eframe::egui::{Label, Slider, Ui};
use crate::constants::*;
use crate::types::Color;

/// Três sliders (vermelho, verde, azul) em linhas de mesma altura.
/// Retorna `true` se algum canal mudou neste frame.
pub fn color_input(ui: &mut Ui, data: &mut Color, height: f32) -> bool {
    let row_height = ((height - GUI_SPACING * 2.0) / 3.0).max(0.0);
    let mut changed = false;

    for (label, value) in [("Red", &mut data.r), ("Green", &mut data.g), ("Blue", &mut data.b)] {
        ui.horizontal(|ui| {
            let label_width = ui.available_width() * GUI_SLIDER_LABEL_HINT;
            ui.add_sized([label_width, row_height], Label::new(label));

            ui.spacing_mut().slider_width = (ui.available_width() - GUI_SLIDER_VALUE_WIDTH).max(0.0);
            changed |= ui.add(Slider::new(value, 0..=CHANNEL_MAX)).changed();
        });
    }

    changed
}
