use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::types::{DownloadRequest, MediaFormat, SUBTITLE_LANGS};

pub struct CommandBuilder {
    binary: PathBuf,
    args: Vec<OsString>
}

impl CommandBuilder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new()
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn url(self, url: impl Into<OsString>) -> Self {
        self.arg(url)
    }

    pub fn version(self) -> Self {
        self.arg("--version")
    }

    pub fn output(self, path: impl AsRef<Path>) -> Self {
        self.arg("-o").arg(path.as_ref().as_os_str())
    }

    pub fn format(self, format: impl Into<OsString>) -> Self {
        self.arg("-f").arg(format)
    }

    pub fn extract_audio(self) -> Self {
        self.arg("-x")
    }

    pub fn audio_format(self, format: impl Into<OsString>) -> Self {
        self.arg("--audio-format").arg(format)
    }

    pub fn audio_quality(self, quality: impl Into<OsString>) -> Self {
        self.arg("--audio-quality").arg(quality)
    }

    pub fn merge_output_format(self, format: impl Into<OsString>) -> Self {
        self.arg("--merge-output-format").arg(format)
    }

    pub fn no_playlist(self) -> Self {
        self.arg("--no-playlist")
    }

    pub fn playlist_start(self, index: u32) -> Self {
        self.arg("--playlist-start").arg(index.to_string())
    }

    pub fn playlist_end(self, index: u32) -> Self {
        self.arg("--playlist-end").arg(index.to_string())
    }

    pub fn write_subtitles(self) -> Self {
        self.arg("--write-subs")
    }

    pub fn write_auto_subtitles(self) -> Self {
        self.arg("--write-auto-subs")
    }

    pub fn subtitles_langs(self, langs: &[&str]) -> Self {
        if langs.is_empty() {
            self
        } else {
            self.arg("--sub-lang").arg(langs.join(","))
        }
    }

    pub fn embed_subtitles(self) -> Self {
        self.arg("--embed-subs")
    }

    pub fn embed_thumbnail(self) -> Self {
        self.arg("--embed-thumbnail")
    }

    pub fn add_metadata(self) -> Self {
        self.arg("--add-metadata")
    }

    pub fn progress(self) -> Self {
        self.arg("--progress")
    }

    pub fn cookies_file(self, path: impl AsRef<Path>) -> Self {
        self.arg("--cookies").arg(path.as_ref().as_os_str())
    }

    pub fn cookies_file_opt(self, path: Option<&PathBuf>) -> Self {
        match path {
            Some(p) => self.cookies_file(p),
            None => self
        }
    }

    pub fn ffmpeg_location(self, path: impl AsRef<Path>) -> Self {
        self.arg("--ffmpeg-location").arg(path.as_ref().as_os_str())
    }

    /// Appends the full argument list for `request`, ending with its URL.
    pub fn download(mut self, request: &DownloadRequest) -> Self {
        self = self.output(request.output_template());

        self = match request.format {
            MediaFormat::Audio => self
                .extract_audio()
                .audio_format(MediaFormat::Audio.as_str())
                .audio_quality(request.audio_quality().codec_value()),
            MediaFormat::Video => self
                .format(request.video_quality().format_selector())
                .merge_output_format(MediaFormat::Video.as_str())
        };

        match request.playlist {
            Some(range) => {
                if range.start > 1 {
                    self = self.playlist_start(range.start);
                }
                if let Some(end) = range.end {
                    self = self.playlist_end(end);
                }
            }
            None => self = self.no_playlist()
        }

        if request.subtitles {
            self = self
                .write_subtitles()
                .write_auto_subtitles()
                .subtitles_langs(SUBTITLE_LANGS);
            if request.format.is_video() {
                self = self.embed_subtitles();
            }
        }

        if request.thumbnail {
            self = self.embed_thumbnail();
        }

        self.add_metadata().progress().url(request.url.clone())
    }

    pub fn build(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(&self.args);
        cmd
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn into_args(self) -> Vec<OsString> {
        self.args
    }
}

/// Arguments for downloading `request`, without any client-level settings.
pub fn download_args(request: &DownloadRequest) -> Vec<OsString> {
    CommandBuilder::new("yt-dlp").download(request).into_args()
}
