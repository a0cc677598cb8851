use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("no csrftoken cookie in response")]
    MissingCsrf,

    /// Login succeeds only with a 302 redirect; any other status lands here.
    #[error("login rejected with HTTP {0}")]
    LoginFailed(u16),

    #[error("{path} returned HTTP {status}")]
    Api { path: String, status: u16 },

    #[error("question `{0}` not found")]
    QuestionNotFound(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
