use std::path::Path;
use std::time::Duration;

use yt_dlp::{DownloadRequest, YtDlp};

use crate::error::AppError;
use crate::output::OutputHandler;

pub struct App {
    client: YtDlp,
    output: OutputHandler
}

impl App {
    pub fn new(client: YtDlp) -> Self {
        Self {
            client,
            output: OutputHandler
        }
    }

    /// Fails when the external tool cannot report its version.
    pub async fn ensure_tool(&self) -> Result<(), AppError> {
        match self.client.check_binary().await {
            Ok(version) => {
                tracing::info!(binary = %self.client.binary().display(), %version, "yt-dlp found");
                Ok(())
            }
            Err(e) => Err(AppError::ToolMissing(e))
        }
    }

    pub async fn run(&self, request: &DownloadRequest) -> Result<Duration, AppError> {
        prepare_output_dir(&request.output_dir).await?;

        self.output.print_summary(request);
        self.output.print_download_start();

        let elapsed = self
            .client
            .download(request)
            .await
            .map_err(AppError::Download)?;

        tracing::info!(?elapsed, url = %request.url, "download finished");
        self.output.print_download_complete(elapsed, &request.output_dir);
        Ok(elapsed)
    }

    pub fn print_error(&self, error: &AppError) {
        self.output.print_error(error);
    }
}

async fn prepare_output_dir(path: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| AppError::CreateDirectory {
            path: path.to_path_buf(),
            source
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prepare_output_dir_creates_parents() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        prepare_output_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_output_dir_over_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("taken");
        std::fs::write(&file, b"x").unwrap();
        let err = prepare_output_dir(&file.join("sub")).await.unwrap_err();
        assert!(matches!(err, AppError::CreateDirectory { .. }));
    }

    #[tokio::test]
    async fn test_ensure_tool_missing() {
        let app = App::new(YtDlp::with_binary("/nonexistent/path/to/yt-dlp"));
        let err = app.ensure_tool().await.unwrap_err();
        assert!(matches!(err, AppError::ToolMissing(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_tool_failure() {
        let temp = tempfile::tempdir().unwrap();
        let app = App::new(YtDlp::with_binary("false"));
        let request = DownloadRequest::new("https://x/y").output_dir(temp.path().join("out"));
        let err = app.run(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Download(yt_dlp::Error::CommandFailed { code: 1 })));
        assert!(temp.path().join("out").is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_success() {
        let temp = tempfile::tempdir().unwrap();
        let app = App::new(YtDlp::with_binary("true"));
        let request = DownloadRequest::new("https://x/y").output_dir(temp.path());
        assert!(app.run(&request).await.is_ok());
    }
}
