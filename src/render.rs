use eframe::egui::{pos2, Rect};
use crate::game::GameState;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub fill: Color,
    pub rect: Rect,
}

/// Divide `area` ao meio: alvo à esquerda, mistura atual à direita.
pub fn swatches(state: &GameState, area: Rect) -> [Swatch; 2] {
    let mid_x = area.center().x;

    let left = Rect::from_min_max(area.min, pos2(mid_x, area.max.y));
    let right = Rect::from_min_max(pos2(mid_x, area.min.y), area.max);

    [
        Swatch { fill: state.target(), rect: left },
        Swatch { fill: state.current(), rect: right },
    ]
}
