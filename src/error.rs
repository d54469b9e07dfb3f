use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The number is too large for the tier it was handed to.
    #[error("number {number} is out of range (maximum is {max})")]
    OutOfRange { number: u64, max: u64 },
    /// A birth date could not be parsed or names an impossible day/month.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// A required payload field is absent or not a string.
    #[error("missing required payload field \"{0}\"")]
    MissingField(String),
    /// The payload is not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
