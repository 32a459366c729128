use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no free port between {start} and {end}")]
    NoFreePort { start: u16, end: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
