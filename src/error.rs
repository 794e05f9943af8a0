// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection, DNS, timeout or body read failures
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body was not JSON, or the payload did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with `success: false`
    #[error("API error: {0}")]
    Api(String),

    #[error("Token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("Missing required setting {0}")]
    MissingSetting(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
