use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("section {id:#06x} declares a body of {declared} bytes but only {available} remain in its parent")]
    InvalidLength {
        id: u32,
        declared: u32,
        available: usize,
    },

    #[error("record declares size {actual}, expected one of {allowed:?}")]
    UnexpectedSize { allowed: &'static [u32], actual: u32 },

    #[error("section nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("string at offset {offset:#x} is not valid UTF-8: {source}")]
    InvalidString {
        offset: usize,
        source: std::string::FromUtf8Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
