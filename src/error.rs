use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid length for {field}: {value} (must be finite and >= 0)")]
    InvalidLength { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
