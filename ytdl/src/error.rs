use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("yt-dlp is not available: {0}")]
    ToolMissing(#[source] yt_dlp::Error),

    #[error("URL is required")]
    MissingUrl,

    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("download failed: {0}")]
    Download(#[source] yt_dlp::Error),

    #[error("failed to read input: {0}")]
    Prompt(#[from] std::io::Error)
}

impl AppError {
    /// Every failure is fatal and reported the same way.
    pub fn code(&self) -> u8 {
        match self {
            AppError::ToolMissing(_)
            | AppError::MissingUrl
            | AppError::EmptyUrl
            | AppError::CreateDirectory { .. }
            | AppError::Download(_)
            | AppError::Prompt(_) => 1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
