use crate::input::InputError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("unknown output format \"{0}\", expected \"text\" or \"json\"")]
    UnknownFormat(String),
    #[error("failed to read or write terminal")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report")]
    Encoding(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
