use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not open the game window: {0}")]
    Window(#[from] eframe::Error),
    #[error("could not install the logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
