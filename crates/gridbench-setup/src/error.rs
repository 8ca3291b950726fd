use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Driver launch failed: {0}")]
    Launch(String),

    #[error(transparent)]
    Core(#[from] gridbench_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
