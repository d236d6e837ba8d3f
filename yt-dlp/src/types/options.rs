use std::path::PathBuf;

use super::quality::{AudioQuality, VideoQuality};

pub const DEFAULT_OUTPUT_DIR: &str = "./downloads";
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";
pub const SUBTITLE_LANGS: &[&str] = &["en", "id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFormat {
    Audio,
    #[default]
    Video
}

impl MediaFormat {
    /// Container the download ends up in.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaFormat::Audio => "mp3",
            MediaFormat::Video => "mp4"
        }
    }

    /// Resolves a `--format` value. Only `mp3` (or `audio`) selects audio;
    /// every other value downloads video.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "mp3" | "audio" => MediaFormat::Audio,
            other => {
                if other != "mp4" && other != "video" {
                    tracing::debug!(tag = other, "unknown format, using video");
                }
                MediaFormat::Video
            }
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaFormat::Video)
    }
}

/// Range of playlist items to fetch, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistRange {
    pub start: u32,
    pub end: Option<u32>
}

impl Default for PlaylistRange {
    fn default() -> Self {
        Self {
            start: 1,
            end: None
        }
    }
}

impl PlaylistRange {
    /// An `end` of 0 means the range is open.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start: start.max(1),
            end: (end > 0).then_some(end)
        }
    }
}

/// Everything needed to run one download. `playlist` is `None` when the URL
/// should be fetched as a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub format: MediaFormat,
    pub quality: String,
    pub output_dir: PathBuf,
    pub output_name: Option<String>,
    pub playlist: Option<PlaylistRange>,
    pub subtitles: bool,
    pub thumbnail: bool
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: MediaFormat::default(),
            quality: "best".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_name: None,
            playlist: None,
            subtitles: false,
            thumbnail: false
        }
    }

    pub fn format(mut self, format: MediaFormat) -> Self {
        self.format = format;
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// A blank name keeps the title-based template.
    pub fn output_name(mut self, name: Option<String>) -> Self {
        self.output_name = name.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn playlist(mut self, range: Option<PlaylistRange>) -> Self {
        self.playlist = range;
        self
    }

    pub fn subtitles(mut self, write: bool) -> Self {
        self.subtitles = write;
        self
    }

    pub fn thumbnail(mut self, embed: bool) -> Self {
        self.thumbnail = embed;
        self
    }

    pub fn audio_quality(&self) -> AudioQuality {
        AudioQuality::from_tag(&self.quality)
    }

    pub fn video_quality(&self) -> VideoQuality {
        VideoQuality::from_tag(&self.quality)
    }

    pub fn is_playlist(&self) -> bool {
        self.playlist.is_some()
    }

    pub fn output_template(&self) -> PathBuf {
        match self.output_name {
            Some(ref name) => self.output_dir.join(format!("{name}.%(ext)s")),
            None => self.output_dir.join(TITLE_TEMPLATE)
        }
    }
}
