use thiserror::Error;

pub type Result<A, E = Error> = std::result::Result<A, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("buffer too small for wire encoding: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },
    #[error("value storage too small: need {need} bytes, got {got}")]
    ValueTooSmall { need: usize, got: usize },
}
