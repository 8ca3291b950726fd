use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown browser name: {0}")]
    UnknownBrowser(String),
}

pub type Result<T> = std::result::Result<T, Error>;
