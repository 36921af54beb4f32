use log::LevelFilter;
use crate::constants::*;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Mix three sliders until your color matches the target", long_about = None)]
pub struct Cli {
    /// Seed for the target color generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    #[arg(short, long = "log-level", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    #[arg(long, default_value_t = GUI_WINDOW_WIDTH, value_parser = parse_window_size)]
    pub width: f32,

    #[arg(long, default_value_t = GUI_WINDOW_HEIGHT, value_parser = parse_window_size)]
    pub height: f32,
}

fn parse_window_size(value: &str) -> Result<f32, String> {
    let size: f32 = value.trim().parse().map_err(|_| format!("`{value}` is not a number"))?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(format!("window size must be a positive finite number, got `{value}`"))
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn visuals(&self) -> eframe::egui::Visuals {
        match self {
            Theme::Light => eframe::egui::Visuals::light(),
            Theme::Dark => eframe::egui::Visuals::dark(),
        }
    }
}
