use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error("{0}")]
    Credential(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error("decoding response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no pronunciation found for {word:?}")]
    MissingPronunciation { word: String },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("cannot use {0:?} as a base url")]
    BaseUrl(String),
    #[error("{0:?} cannot be used as a url path segment")]
    PathSegment(String),
    #[error("writing output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Every failure is terminal and reported with status 1, except clap's
    /// help and version displays, which are not errors at all.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) if !e.use_stderr() => 0,
            _ => 1,
        }
    }
}
