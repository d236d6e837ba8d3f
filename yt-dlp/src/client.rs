use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::command::CommandBuilder;
use crate::error::{Error, Result};
use crate::types::DownloadRequest;

#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
    cookies_file: Option<PathBuf>,
    ffmpeg_location: Option<PathBuf>
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlp {
    pub fn new() -> Self {
        Self::with_binary("yt-dlp")
    }

    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            binary: path.into(),
            cookies_file: None,
            ffmpeg_location: None
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn set_cookies_file(&mut self, path: Option<PathBuf>) {
        self.cookies_file = path;
    }

    pub fn set_ffmpeg_location(&mut self, path: Option<PathBuf>) {
        self.ffmpeg_location = path;
    }

    /// Runs `--version` and returns the reported version string.
    pub async fn check_binary(&self) -> Result<String> {
        let output = self
            .command()
            .version()
            .build()
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(Error::BinaryNotExecutable(self.binary.clone()))
        }
    }

    /// Full command line for `request`, including client-level settings.
    pub fn download_command(&self, request: &DownloadRequest) -> CommandBuilder {
        self.command().download(request)
    }

    /// Runs the download with the child's stdout and stderr attached to ours
    /// and waits for it to exit. Returns the wall-clock time the child ran.
    pub async fn download(&self, request: &DownloadRequest) -> Result<Duration> {
        if request.url.trim().is_empty() {
            return Err(Error::InvalidUrl(request.url.clone()));
        }

        let builder = self.download_command(request);

        tracing::debug!(
            binary = %self.binary.display(),
            args = ?builder.get_args(),
            "spawning yt-dlp"
        );

        let mut cmd = builder.build();
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let started = Instant::now();
        let mut child = cmd.spawn().map_err(|e| self.spawn_error(e))?;
        let status = child.wait().await?;
        let elapsed = started.elapsed();

        tracing::debug!(?status, ?elapsed, "yt-dlp exited");

        check_status(status)?;
        Ok(elapsed)
    }

    fn command(&self) -> CommandBuilder {
        let mut builder = CommandBuilder::new(&self.binary)
            .cookies_file_opt(self.cookies_file.as_ref());

        if let Some(ref ffmpeg_path) = self.ffmpeg_location {
            builder = builder.ffmpeg_location(ffmpeg_path);
        }

        builder
    }

    fn spawn_error(&self, err: std::io::Error) -> Error {
        match err.kind() {
            ErrorKind::NotFound => Error::BinaryNotFound(self.binary.clone()),
            ErrorKind::PermissionDenied => Error::BinaryNotExecutable(self.binary.clone()),
            _ => Error::ExecutionFailed(err)
        }
    }
}

fn check_status(status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(Error::CommandFailed { code }),
        None => Err(Error::Terminated)
    }
}
