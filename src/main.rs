mod app;
mod cli;
mod constants;
mod error;
mod game;
mod render;
mod types;

use clap::Parser;
use constants::*;
use eframe::{NativeOptions, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use log::{error, info};
use simple_logger::SimpleLogger;
use app::App;
use cli::Cli;
use error::AppError;
use game::GameState;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .map_err(AppError::from)
        .unwrap_or_else(|err| eprintln!("{err}"));

    let state = GameState::from_seed(cli.seed);
    let theme = cli.theme;
    match cli.seed {
        Some(seed) => info!("Starting with seed {seed}"),
        None => info!("Starting with an entropy seed"),
    }

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(cli.width, cli.height)),
            resizable: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        GUI_WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, theme)))),
    )
    .map_err(|err| {
        error!("{err}");
        AppError::from(err)
    })
}
