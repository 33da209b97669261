use thiserror::Error;

#[derive(Error, Debug)]
pub enum InknoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Wrong key: {0}")]
    WrongKey(String),

    #[error("Decompression error: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Page not found: {0}")]
    PageNotFound(usize),

    #[error("Stroke {stroke} not found on page {page}")]
    StrokeNotFound { page: usize, stroke: usize },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl InknoteError {
    /// Short, stable label for the failure kind. Used in log lines and the
    /// doctor report.
    pub fn kind(&self) -> &'static str {
        match self {
            InknoteError::Io(_) => "io",
            InknoteError::MalformedDocument(_) => "malformed document",
            InknoteError::Decode(_) => "decode",
            InknoteError::WrongKey(_) => "wrong key",
            InknoteError::Decompression(_) => "decompression",
            InknoteError::InvalidValue(_) => "invalid value",
            InknoteError::PageNotFound(_) => "page not found",
            InknoteError::StrokeNotFound { .. } => "stroke not found",
            InknoteError::Store(_) => "store",
            InknoteError::Config(_) => "config",
            InknoteError::Api(_) => "api",
        }
    }
}

pub type Result<T> = std::result::Result<T, InknoteError>;
