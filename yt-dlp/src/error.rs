use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("yt-dlp binary not found: {0}")]
    BinaryNotFound(PathBuf),

    #[error("yt-dlp binary not executable: {0}")]
    BinaryNotExecutable(PathBuf),

    #[error("failed to execute yt-dlp: {0}")]
    ExecutionFailed(#[from] std::io::Error),

    #[error("yt-dlp exited with code {code}")]
    CommandFailed { code: i32 },

    #[error("yt-dlp was terminated by a signal")]
    Terminated,

    #[error("invalid URL: {0}")]
    InvalidUrl(String)
}

pub type Result<T> = std::result::Result<T, Error>;
