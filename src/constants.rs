pub const GUI_WINDOW_TITLE: &str = "Color Match";
pub const GUI_WINDOW_WIDTH: f32 = 400.0;
pub const GUI_WINDOW_HEIGHT: f32 = 600.0;
pub const GUI_PADDING: f32 = 10.0;
pub const GUI_SPACING: f32 = 10.0;
pub const GUI_SLIDER_VALUE_WIDTH: f32 = 60.0;

// Peso de cada linha; a altura disponível é dividida por GUI_HINT_TOTAL
pub const GUI_SWATCH_HINT: f32 = 0.3;
pub const GUI_HEADING_HINT: f32 = 0.1;
pub const GUI_SLIDERS_HINT: f32 = 0.4;
pub const GUI_BUTTON_HINT: f32 = 0.1;
pub const GUI_FEEDBACK_HINT: f32 = 0.1;
pub const GUI_HINT_TOTAL: f32 =
    GUI_SWATCH_HINT + GUI_HEADING_HINT + GUI_SLIDERS_HINT + GUI_BUTTON_HINT * 2.0 + GUI_FEEDBACK_HINT;
pub const GUI_SLIDER_LABEL_HINT: f32 = 0.2;

pub const CHANNEL_MAX: u8 = 255;
pub const MAX_DIFF: u32 = CHANNEL_MAX as u32 * 3;

pub const HEADING_TEXT: &str = "Match the color!";
pub const ROUND_PROMPT: &str = "Try to match the color on the left!";
